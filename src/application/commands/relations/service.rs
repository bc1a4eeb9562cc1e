use std::sync::Arc;

use crate::domain::{
    casting::CastingRepository, film::FilmRepository, genre::GenreRepository,
    relation::RelationRepository,
};

/// Keeps a film's genre and cast relations in line with what an editor submits.
pub struct RelationCommandService {
    pub(super) films: Arc<dyn FilmRepository>,
    pub(super) genres: Arc<dyn GenreRepository>,
    pub(super) castings: Arc<dyn CastingRepository>,
    pub(super) relations: Arc<dyn RelationRepository>,
}

impl RelationCommandService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        genres: Arc<dyn GenreRepository>,
        castings: Arc<dyn CastingRepository>,
        relations: Arc<dyn RelationRepository>,
    ) -> Self {
        Self {
            films,
            genres,
            castings,
            relations,
        }
    }
}
