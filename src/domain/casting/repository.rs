use crate::domain::casting::entity::{Casting, CastingId, NewCasting};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CastingRepository: Send + Sync {
    async fn insert(&self, casting: NewCasting) -> DomainResult<Casting>;

    async fn find_by_id(&self, id: CastingId) -> DomainResult<Option<Casting>>;

    async fn list(&self) -> DomainResult<Vec<Casting>>;

    async fn existing_ids(&self, ids: &[CastingId]) -> DomainResult<Vec<CastingId>>;

    async fn update(&self, casting: &Casting) -> DomainResult<Casting>;

    async fn delete(&self, id: CastingId) -> DomainResult<()>;
}
