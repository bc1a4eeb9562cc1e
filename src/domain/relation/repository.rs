use crate::domain::errors::DomainResult;
use crate::domain::film::FilmId;
use crate::domain::genre::GenreId;
use crate::domain::relation::casting::{
    CastingAssignment, CastingLineup, CastingRelation, CastingRelationDetail, CastingRelationId,
    CastingRole,
};
use crate::domain::relation::genre::{GenreRelation, GenreRelationDetail, GenreSelection};
use async_trait::async_trait;

#[async_trait]
pub trait RelationRepository: Send + Sync {
    async fn list_genre_relations(
        &self,
        film_id: Option<FilmId>,
    ) -> DomainResult<Vec<GenreRelationDetail>>;

    /// Inserts every pair or none of them.
    async fn create_genre_relations(
        &self,
        pairs: Vec<(FilmId, GenreId)>,
    ) -> DomainResult<Vec<GenreRelation>>;

    /// Replaces the film's genre set in one transaction.
    async fn replace_genres(
        &self,
        film_id: FilmId,
        genres: &GenreSelection,
    ) -> DomainResult<Vec<GenreRelation>>;

    async fn list_casting_relations(
        &self,
        film_id: Option<FilmId>,
    ) -> DomainResult<Vec<CastingRelationDetail>>;

    async fn find_casting_relation(
        &self,
        id: CastingRelationId,
    ) -> DomainResult<Option<CastingRelation>>;

    async fn create_casting_relation(
        &self,
        film_id: FilmId,
        assignment: CastingAssignment,
    ) -> DomainResult<CastingRelation>;

    async fn update_casting_role(
        &self,
        id: CastingRelationId,
        role: CastingRole,
    ) -> DomainResult<CastingRelation>;

    async fn delete_casting_relation(&self, id: CastingRelationId) -> DomainResult<()>;

    /// Reads the film's current cast, applies the `CastingPlan` diff against `lineup`
    /// together with the lineup's photo overrides, and commits as one transaction.
    async fn sync_castings(
        &self,
        film_id: FilmId,
        lineup: &CastingLineup,
    ) -> DomainResult<Vec<CastingRelation>>;
}
