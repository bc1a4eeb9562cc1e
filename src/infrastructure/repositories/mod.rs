// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_catalog;
mod postgres_film;
mod postgres_password_reset;
mod postgres_relation;
mod postgres_review;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_catalog::{PostgresCastingRepository, PostgresGenreRepository};
pub use postgres_film::PostgresFilmRepository;
pub use postgres_password_reset::PostgresPasswordResetRepository;
pub use postgres_relation::PostgresRelationRepository;
pub use postgres_review::PostgresReviewRepository;
pub use postgres_user::PostgresUserRepository;
