pub(crate) mod capability;
pub mod catalog;
pub mod films;
pub mod links;
pub mod media;
pub mod relations;
pub mod reviews;
pub mod users;

pub use links::CastingAssignmentInput;
