use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        casting::CastingRepository,
        film::{FilmRepository, FilmSlugService},
        genre::GenreRepository,
    },
};

pub struct FilmCommandService {
    pub(super) films: Arc<dyn FilmRepository>,
    pub(super) genres: Arc<dyn GenreRepository>,
    pub(super) castings: Arc<dyn CastingRepository>,
    pub(super) slug_service: Arc<FilmSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl FilmCommandService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        genres: Arc<dyn GenreRepository>,
        castings: Arc<dyn CastingRepository>,
        slug_service: Arc<FilmSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            films,
            genres,
            castings,
            slug_service,
            clock,
        }
    }
}
