pub mod catalog;
pub mod films;
pub mod relations;
pub mod reviews;
pub mod users;
