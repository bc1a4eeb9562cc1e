use std::sync::Arc;

use crate::{
    application::{
        dto::{CastingRelationDto, GenreRelationDto},
        error::ApplicationResult,
    },
    domain::{film::FilmId, relation::RelationRepository},
};

pub struct RelationQueryService {
    relations: Arc<dyn RelationRepository>,
}

impl RelationQueryService {
    pub fn new(relations: Arc<dyn RelationRepository>) -> Self {
        Self { relations }
    }

    pub async fn list_genre_relations(
        &self,
        film_id: Option<i64>,
    ) -> ApplicationResult<Vec<GenreRelationDto>> {
        let film_id = film_id.map(FilmId::new).transpose()?;
        let relations = self.relations.list_genre_relations(film_id).await?;
        Ok(relations.into_iter().map(Into::into).collect())
    }

    pub async fn list_casting_relations(
        &self,
        film_id: Option<i64>,
    ) -> ApplicationResult<Vec<CastingRelationDto>> {
        let film_id = film_id.map(FilmId::new).transpose()?;
        let relations = self.relations.list_casting_relations(film_id).await?;
        Ok(relations.into_iter().map(Into::into).collect())
    }
}
