mod comments;
mod ratings;
mod service;

pub use comments::{SubmitCommentCommand, UpdateCommentCommand};
pub use ratings::{CreateRatingCommand, UpdateRatingCommand};
pub use service::ReviewCommandService;
