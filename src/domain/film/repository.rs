use crate::domain::errors::DomainResult;
use crate::domain::film::entity::{Film, NewFilm};
use crate::domain::film::value_objects::{FilmId, FilmSlug};
use crate::domain::relation::{CastingLineup, GenreSelection};
use async_trait::async_trait;

/// Relations written together with a new film.
#[derive(Debug, Clone, Default)]
pub struct FilmLinks {
    pub genres: GenreSelection,
    pub castings: CastingLineup,
}

#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Inserts the film and its relations atomically.
    async fn insert(&self, film: NewFilm, links: FilmLinks) -> DomainResult<Film>;

    async fn update(&self, film: &Film) -> DomainResult<Film>;

    /// Deletes the film with its ratings, comments, and relations.
    async fn delete(&self, id: FilmId) -> DomainResult<()>;

    async fn find_by_id(&self, id: FilmId) -> DomainResult<Option<Film>>;

    async fn find_by_slug(&self, slug: &FilmSlug) -> DomainResult<Option<Film>>;

    async fn list(&self) -> DomainResult<Vec<Film>>;
}
