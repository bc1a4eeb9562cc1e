use std::sync::Arc;

use crate::{
    application::{
        dto::{CommentEntryDto, RatingDto},
        error::ApplicationResult,
    },
    domain::{film::FilmId, review::ReviewRepository},
};

pub struct ReviewQueryService {
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewQueryService {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    pub async fn list_comments(
        &self,
        film_id: Option<i64>,
    ) -> ApplicationResult<Vec<CommentEntryDto>> {
        let film_id = film_id.map(FilmId::new).transpose()?;
        let comments = self.reviews.list_comments(film_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn list_ratings(&self, film_id: Option<i64>) -> ApplicationResult<Vec<RatingDto>> {
        let film_id = film_id.map(FilmId::new).transpose()?;
        let ratings = self.reviews.list_ratings(film_id).await?;
        Ok(ratings.into_iter().map(Into::into).collect())
    }
}
