use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        film::{FilmId, FilmRepository},
        review::ReviewRepository,
    },
};

/// Guards the one-comment / one-rating per (user, film) rules.
pub struct ReviewCommandService {
    pub(super) films: Arc<dyn FilmRepository>,
    pub(super) reviews: Arc<dyn ReviewRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReviewCommandService {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        reviews: Arc<dyn ReviewRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            films,
            reviews,
            clock,
        }
    }

    pub(super) async fn ensure_film_exists(&self, film_id: FilmId) -> ApplicationResult<()> {
        if self.films.find_by_id(film_id).await?.is_none() {
            return Err(ApplicationError::not_found("film not found"));
        }
        Ok(())
    }
}
