mod castings;
mod genres;
mod service;

pub use castings::{
    CreateCastingRelationCommand, SyncCastingsCommand, UpdateCastingRelationCommand,
};
pub use genres::{CreateGenreRelationsCommand, ReplaceGenresCommand};
pub use service::RelationCommandService;
