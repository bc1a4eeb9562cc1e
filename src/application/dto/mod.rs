pub mod auth;
pub mod catalog;
pub mod films;
pub mod relations;
pub mod reviews;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use catalog::{CastingDto, GenreDto};
pub use films::{FilmDetailDto, FilmDto, FilmSummaryDto};
pub use relations::{CastingRelationDto, GenreRelationDto};
pub use reviews::{CommentAuthorDto, CommentDto, CommentEntryDto, RatingDto, SubmittedCommentDto};
pub use users::{CapabilityView, UserDto, UserProfileDto};
