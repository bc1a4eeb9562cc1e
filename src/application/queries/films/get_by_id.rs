use super::{FilmQueryService, service::group_genres};
use crate::{
    application::{
        dto::FilmSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::film::FilmId,
};

pub struct GetFilmByIdQuery {
    pub id: i64,
}

impl FilmQueryService {
    pub async fn get_film(&self, query: GetFilmByIdQuery) -> ApplicationResult<FilmSummaryDto> {
        let id = FilmId::new(query.id)?;
        let film = self
            .films
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("film not found"))?;

        let mut genres = group_genres(self.relations.list_genre_relations(Some(id)).await?);
        Ok(FilmSummaryDto {
            genre_relations: genres.remove(&id).unwrap_or_default(),
            film: film.into(),
        })
    }
}
