use std::sync::Arc;

use crate::domain::{casting::CastingRepository, genre::GenreRepository};

/// Writes to the shared genre and cast catalogs.
pub struct CatalogCommandService {
    pub(super) genres: Arc<dyn GenreRepository>,
    pub(super) castings: Arc<dyn CastingRepository>,
}

impl CatalogCommandService {
    pub fn new(genres: Arc<dyn GenreRepository>, castings: Arc<dyn CastingRepository>) -> Self {
        Self { genres, castings }
    }
}
