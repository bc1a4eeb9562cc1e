use super::{FilmQueryService, service::group_genres};
use crate::application::{dto::FilmSummaryDto, error::ApplicationResult};

impl FilmQueryService {
    /// All films, newest first, each with its genres.
    pub async fn list_films(&self) -> ApplicationResult<Vec<FilmSummaryDto>> {
        let films = self.films.list().await?;
        let mut genres = group_genres(self.relations.list_genre_relations(None).await?);

        Ok(films
            .into_iter()
            .map(|film| FilmSummaryDto {
                genre_relations: genres.remove(&film.id).unwrap_or_default(),
                film: film.into(),
            })
            .collect())
    }
}
