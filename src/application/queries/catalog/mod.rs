use std::sync::Arc;

use crate::{
    application::{
        dto::{CastingDto, GenreDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        casting::{CastingId, CastingRepository},
        genre::{GenreId, GenreRepository},
    },
};

pub struct CatalogQueryService {
    genres: Arc<dyn GenreRepository>,
    castings: Arc<dyn CastingRepository>,
}

impl CatalogQueryService {
    pub fn new(genres: Arc<dyn GenreRepository>, castings: Arc<dyn CastingRepository>) -> Self {
        Self { genres, castings }
    }

    pub async fn list_genres(&self) -> ApplicationResult<Vec<GenreDto>> {
        let genres = self.genres.list().await?;
        Ok(genres.into_iter().map(Into::into).collect())
    }

    pub async fn get_genre(&self, id: i64) -> ApplicationResult<GenreDto> {
        let id = GenreId::new(id)?;
        self.genres
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("genre not found"))
    }

    pub async fn list_castings(&self) -> ApplicationResult<Vec<CastingDto>> {
        let castings = self.castings.list().await?;
        Ok(castings.into_iter().map(Into::into).collect())
    }

    pub async fn get_casting(&self, id: i64) -> ApplicationResult<CastingDto> {
        let id = CastingId::new(id)?;
        self.castings
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("casting not found"))
    }
}
