use std::collections::HashSet;

use super::RelationCommandService;
use crate::{
    application::{
        commands::links::{load_editable_film, resolve_genres},
        dto::{AuthenticatedUser, GenreRelationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::film::FilmId,
};

/// Pairs to link; every pair is inserted or none is.
pub struct CreateGenreRelationsCommand {
    pub pairs: Vec<(i64, i64)>,
}

pub struct ReplaceGenresCommand {
    pub film_id: i64,
    pub genre_ids: Vec<i64>,
}

impl RelationCommandService {
    pub async fn create_genre_relations(
        &self,
        actor: &AuthenticatedUser,
        command: CreateGenreRelationsCommand,
    ) -> ApplicationResult<Vec<GenreRelationDto>> {
        if command.pairs.is_empty() {
            return Err(ApplicationError::validation(
                "at least one genre relation is required",
            ));
        }

        let mut checked_films = HashSet::new();
        let mut pairs = Vec::with_capacity(command.pairs.len());
        for (film_id, genre_id) in command.pairs {
            let film_id = FilmId::new(film_id)?;
            if checked_films.insert(film_id) {
                load_editable_film(self.films.as_ref(), actor, film_id).await?;
            }
            let genre = resolve_genres(self.genres.as_ref(), vec![genre_id]).await?;
            pairs.extend(genre.as_slice().iter().map(|genre_id| (film_id, *genre_id)));
        }

        let created = self.relations.create_genre_relations(pairs).await?;
        Ok(created.into_iter().map(Into::into).collect())
    }

    /// Full replace: afterwards the film is linked to exactly `genre_ids`.
    pub async fn replace_film_genres(
        &self,
        actor: &AuthenticatedUser,
        command: ReplaceGenresCommand,
    ) -> ApplicationResult<Vec<GenreRelationDto>> {
        let film_id = FilmId::new(command.film_id)?;
        load_editable_film(self.films.as_ref(), actor, film_id).await?;

        let selection = resolve_genres(self.genres.as_ref(), command.genre_ids).await?;
        let relations = self.relations.replace_genres(film_id, &selection).await?;
        tracing::debug!(film_id = %film_id, count = relations.len(), "film genres replaced");
        Ok(relations.into_iter().map(Into::into).collect())
    }
}
