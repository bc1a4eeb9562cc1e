//! Comments, ratings and the per-film average.

pub mod average;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use average::{RatingSample, average_rating};
pub use entity::{Comment, CommentAuthor, CommentEntry, NewComment, NewRating, Rating};
pub use repository::ReviewRepository;
pub use value_objects::{CommentContent, CommentId, RatingId, Score};
