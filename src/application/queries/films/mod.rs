mod detail;
mod get_by_id;
mod list;
mod service;

pub use detail::GetFilmBySlugQuery;
pub use get_by_id::GetFilmByIdQuery;
pub use service::FilmQueryService;
