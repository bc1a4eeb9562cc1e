// src/infrastructure/repositories/postgres_catalog.rs
use super::map_sqlx;
use crate::domain::casting::{Casting, CastingId, CastingRepository, NewCasting, PersonName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::genre::{Genre, GenreId, GenreName, GenreRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresGenreRepository {
    pool: PgPool,
}

impl PostgresGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCastingRepository {
    pool: PgPool,
}

impl PostgresCastingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

impl TryFrom<GenreRow> for Genre {
    type Error = DomainError;

    fn try_from(row: GenreRow) -> Result<Self, Self::Error> {
        Ok(Genre {
            id: GenreId::new(row.id)?,
            name: GenreName::new(row.name)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct CastingRow {
    id: i64,
    real_name: String,
    stage_name: String,
    photo: Option<String>,
}

impl TryFrom<CastingRow> for Casting {
    type Error = DomainError;

    fn try_from(row: CastingRow) -> Result<Self, Self::Error> {
        Ok(Casting {
            id: CastingId::new(row.id)?,
            real_name: PersonName::new(row.real_name)?,
            stage_name: PersonName::new(row.stage_name)?,
            photo: row.photo,
        })
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    async fn insert(&self, name: GenreName) -> DomainResult<Genre> {
        let row = sqlx::query_as::<_, GenreRow>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Genre::try_from(row)
    }

    async fn find_by_id(&self, id: GenreId) -> DomainResult<Option<Genre>> {
        let row = sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Genre::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, GenreRow>("SELECT id, name FROM genres ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Genre::try_from).collect()
    }

    async fn existing_ids(&self, ids: &[GenreId]) -> DomainResult<Vec<GenreId>> {
        let ids: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM genres WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        found.into_iter().map(GenreId::new).collect()
    }

    async fn rename(&self, id: GenreId, name: GenreName) -> DomainResult<Genre> {
        let row = sqlx::query_as::<_, GenreRow>(
            "UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(name.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("genre not found".into()))?;

        Genre::try_from(row)
    }

    async fn delete(&self, id: GenreId) -> DomainResult<()> {
        // genre_relations rows go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("genre not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CastingRepository for PostgresCastingRepository {
    async fn insert(&self, casting: NewCasting) -> DomainResult<Casting> {
        let row = sqlx::query_as::<_, CastingRow>(
            "INSERT INTO castings (real_name, stage_name, photo) VALUES ($1, $2, $3)
             RETURNING id, real_name, stage_name, photo",
        )
        .bind(casting.real_name.as_str())
        .bind(casting.stage_name.as_str())
        .bind(casting.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Casting::try_from(row)
    }

    async fn find_by_id(&self, id: CastingId) -> DomainResult<Option<Casting>> {
        let row = sqlx::query_as::<_, CastingRow>(
            "SELECT id, real_name, stage_name, photo FROM castings WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Casting::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Casting>> {
        let rows = sqlx::query_as::<_, CastingRow>(
            "SELECT id, real_name, stage_name, photo FROM castings ORDER BY stage_name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Casting::try_from).collect()
    }

    async fn existing_ids(&self, ids: &[CastingId]) -> DomainResult<Vec<CastingId>> {
        let ids: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM castings WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        found.into_iter().map(CastingId::new).collect()
    }

    async fn update(&self, casting: &Casting) -> DomainResult<Casting> {
        let row = sqlx::query_as::<_, CastingRow>(
            "UPDATE castings SET real_name = $1, stage_name = $2, photo = $3 WHERE id = $4
             RETURNING id, real_name, stage_name, photo",
        )
        .bind(casting.real_name.as_str())
        .bind(casting.stage_name.as_str())
        .bind(casting.photo.as_deref())
        .bind(i64::from(casting.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("casting not found".into()))?;

        Casting::try_from(row)
    }

    async fn delete(&self, id: CastingId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM castings WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("casting not found".into()));
        }
        Ok(())
    }
}
