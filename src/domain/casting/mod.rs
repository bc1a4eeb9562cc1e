pub mod entity;
pub mod repository;

pub use entity::{Casting, CastingChanges, CastingId, NewCasting, PersonName};
pub use repository::CastingRepository;
