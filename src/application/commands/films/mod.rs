mod create;
mod delete;
mod service;
mod update;

pub use create::CreateFilmCommand;
pub use delete::DeleteFilmCommand;
pub use service::FilmCommandService;
pub use update::UpdateFilmCommand;
