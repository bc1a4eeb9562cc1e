use super::FilmQueryService;
use crate::{
    application::{
        dto::FilmDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{film::FilmSlug, review::average_rating},
};

pub struct GetFilmBySlugQuery {
    pub slug: String,
}

impl FilmQueryService {
    /// The film page: genres, cast, comments with authors and ratings, and the average
    /// score over USER-role ratings, computed on every request.
    pub async fn get_film_by_slug(
        &self,
        query: GetFilmBySlugQuery,
    ) -> ApplicationResult<FilmDetailDto> {
        let slug =
            FilmSlug::new(query.slug).map_err(|_| ApplicationError::not_found("film not found"))?;
        let film = self
            .films
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("film not found"))?;
        let film_id = film.id;

        let genre_relations = self.relations.list_genre_relations(Some(film_id)).await?;
        let casting_relations = self.relations.list_casting_relations(Some(film_id)).await?;
        let comments = self.reviews.list_comments(Some(film_id)).await?;
        let samples = self.reviews.rating_samples(film_id).await?;

        Ok(FilmDetailDto {
            film: film.into(),
            genre_relations: genre_relations.into_iter().map(Into::into).collect(),
            casting_relations: casting_relations.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
            avg_rating: average_rating(&samples),
        })
    }
}
