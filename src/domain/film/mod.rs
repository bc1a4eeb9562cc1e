pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Film, FilmChanges, FilmDetails, NewFilm};
pub use repository::{FilmLinks, FilmRepository};
pub use services::FilmSlugService;
pub use value_objects::{Category, FilmDescription, FilmId, FilmSlug, FilmTitle};
