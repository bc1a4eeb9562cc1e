pub mod entity;
pub mod repository;

pub use entity::{Genre, GenreId, GenreName};
pub use repository::GenreRepository;
