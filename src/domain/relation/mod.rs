//! Links between films and the shared genre and cast catalogs.

pub mod casting;
pub mod genre;
pub mod repository;

pub use casting::{
    CastingAssignment, CastingLineup, CastingPlan, CastingRelation, CastingRelationDetail,
    CastingRelationId, CastingRole,
};
pub use genre::{GenreRelation, GenreRelationDetail, GenreRelationId, GenreSelection};
pub use repository::RelationRepository;
