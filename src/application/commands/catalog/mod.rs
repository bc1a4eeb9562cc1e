mod castings;
mod genres;
mod service;

pub use castings::{CreateCastingCommand, UpdateCastingCommand};
pub use genres::{CreateGenreCommand, RenameGenreCommand};
pub use service::CatalogCommandService;
