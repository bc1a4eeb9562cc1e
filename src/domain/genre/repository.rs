use crate::domain::errors::DomainResult;
use crate::domain::genre::entity::{Genre, GenreId, GenreName};
use async_trait::async_trait;

#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn insert(&self, name: GenreName) -> DomainResult<Genre>;

    async fn find_by_id(&self, id: GenreId) -> DomainResult<Option<Genre>>;

    async fn list(&self) -> DomainResult<Vec<Genre>>;

    /// The subset of `ids` that exist.
    async fn existing_ids(&self, ids: &[GenreId]) -> DomainResult<Vec<GenreId>>;

    async fn rename(&self, id: GenreId, name: GenreName) -> DomainResult<Genre>;

    /// Deleting a genre also drops every film relation pointing at it.
    async fn delete(&self, id: GenreId) -> DomainResult<()>;
}
