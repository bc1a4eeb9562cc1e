// src/infrastructure/repositories/postgres_relation.rs
use super::map_sqlx;
use crate::domain::casting::{Casting, CastingId, PersonName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::film::FilmId;
use crate::domain::genre::{Genre, GenreId, GenreName};
use crate::domain::relation::{
    CastingAssignment, CastingLineup, CastingPlan, CastingRelation, CastingRelationDetail,
    CastingRelationId, CastingRole, GenreRelation, GenreRelationDetail, GenreRelationId,
    GenreSelection, RelationRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};

#[derive(Clone)]
pub struct PostgresRelationRepository {
    pool: PgPool,
}

impl PostgresRelationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GenreRelationRow {
    id: i64,
    film_id: i64,
    genre_id: i64,
}

impl TryFrom<GenreRelationRow> for GenreRelation {
    type Error = DomainError;

    fn try_from(row: GenreRelationRow) -> Result<Self, Self::Error> {
        Ok(GenreRelation {
            id: GenreRelationId(row.id),
            film_id: FilmId::new(row.film_id)?,
            genre_id: GenreId::new(row.genre_id)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct GenreRelationDetailRow {
    id: i64,
    film_id: i64,
    genre_id: i64,
    genre_name: String,
}

impl TryFrom<GenreRelationDetailRow> for GenreRelationDetail {
    type Error = DomainError;

    fn try_from(row: GenreRelationDetailRow) -> Result<Self, Self::Error> {
        let genre_id = GenreId::new(row.genre_id)?;
        Ok(GenreRelationDetail {
            relation: GenreRelation {
                id: GenreRelationId(row.id),
                film_id: FilmId::new(row.film_id)?,
                genre_id,
            },
            genre: Genre {
                id: genre_id,
                name: GenreName::new(row.genre_name)?,
            },
        })
    }
}

#[derive(Debug, FromRow)]
struct CastingRelationRow {
    id: i64,
    film_id: i64,
    casting_id: i64,
    role: String,
}

impl TryFrom<CastingRelationRow> for CastingRelation {
    type Error = DomainError;

    fn try_from(row: CastingRelationRow) -> Result<Self, Self::Error> {
        Ok(CastingRelation {
            id: CastingRelationId::new(row.id)?,
            film_id: FilmId::new(row.film_id)?,
            casting_id: CastingId::new(row.casting_id)?,
            role: CastingRole::new(row.role)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct CastingRelationDetailRow {
    id: i64,
    film_id: i64,
    casting_id: i64,
    role: String,
    real_name: String,
    stage_name: String,
    photo: Option<String>,
}

impl TryFrom<CastingRelationDetailRow> for CastingRelationDetail {
    type Error = DomainError;

    fn try_from(row: CastingRelationDetailRow) -> Result<Self, Self::Error> {
        let casting_id = CastingId::new(row.casting_id)?;
        Ok(CastingRelationDetail {
            relation: CastingRelation {
                id: CastingRelationId::new(row.id)?,
                film_id: FilmId::new(row.film_id)?,
                casting_id,
                role: CastingRole::new(row.role)?,
            },
            casting: Casting {
                id: casting_id,
                real_name: PersonName::new(row.real_name)?,
                stage_name: PersonName::new(row.stage_name)?,
                photo: row.photo,
            },
        })
    }
}

pub(super) async fn insert_genre_links(
    conn: &mut PgConnection,
    film_id: FilmId,
    genres: &[GenreId],
) -> DomainResult<Vec<GenreRelation>> {
    let mut created = Vec::with_capacity(genres.len());
    for genre_id in genres {
        let row = sqlx::query_as::<_, GenreRelationRow>(
            "INSERT INTO genre_relations (film_id, genre_id) VALUES ($1, $2)
             RETURNING id, film_id, genre_id",
        )
        .bind(i64::from(film_id))
        .bind(i64::from(*genre_id))
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)?;
        created.push(GenreRelation::try_from(row)?);
    }
    Ok(created)
}

pub(super) async fn insert_casting_link(
    conn: &mut PgConnection,
    film_id: FilmId,
    assignment: &CastingAssignment,
) -> DomainResult<CastingRelation> {
    let row = sqlx::query_as::<_, CastingRelationRow>(
        "INSERT INTO casting_relations (film_id, casting_id, role) VALUES ($1, $2, $3)
         RETURNING id, film_id, casting_id, role",
    )
    .bind(i64::from(film_id))
    .bind(i64::from(assignment.casting_id))
    .bind(assignment.role.as_str())
    .fetch_one(&mut *conn)
    .await
    .map_err(map_sqlx)?;
    CastingRelation::try_from(row)
}

/// Writes the lineup's photo overrides onto the shared `castings` rows.
pub(super) async fn apply_photo_overrides(
    conn: &mut PgConnection,
    lineup: &CastingLineup,
) -> DomainResult<()> {
    for (casting_id, photo) in lineup.photo_overrides() {
        sqlx::query("UPDATE castings SET photo = $1 WHERE id = $2")
            .bind(photo)
            .bind(i64::from(casting_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

async fn lock_film(conn: &mut PgConnection, film_id: FilmId) -> DomainResult<()> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM films WHERE id = $1 FOR UPDATE")
        .bind(i64::from(film_id))
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?
        .map(|_| ())
        .ok_or_else(|| DomainError::NotFound("film not found".into()))
}

async fn ensure_genres_exist(conn: &mut PgConnection, genres: &GenreSelection) -> DomainResult<()> {
    if genres.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = genres.as_slice().iter().map(|id| i64::from(*id)).collect();
    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM genres WHERE id = ANY($1)")
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    let existing = existing
        .into_iter()
        .map(GenreId::new)
        .collect::<DomainResult<Vec<_>>>()?;
    genres.ensure_all_exist(&existing)
}

#[async_trait]
impl RelationRepository for PostgresRelationRepository {
    async fn list_genre_relations(
        &self,
        film_id: Option<FilmId>,
    ) -> DomainResult<Vec<GenreRelationDetail>> {
        let rows = sqlx::query_as::<_, GenreRelationDetailRow>(
            "SELECT gr.id, gr.film_id, gr.genre_id, g.name AS genre_name
             FROM genre_relations gr
             JOIN genres g ON g.id = gr.genre_id
             WHERE $1::BIGINT IS NULL OR gr.film_id = $1
             ORDER BY gr.film_id, gr.id",
        )
        .bind(film_id.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(GenreRelationDetail::try_from).collect()
    }

    async fn create_genre_relations(
        &self,
        pairs: Vec<(FilmId, GenreId)>,
    ) -> DomainResult<Vec<GenreRelation>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let mut created = Vec::with_capacity(pairs.len());
        for (film_id, genre_id) in pairs {
            created.extend(insert_genre_links(&mut tx, film_id, &[genre_id]).await?);
        }
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn replace_genres(
        &self,
        film_id: FilmId,
        genres: &GenreSelection,
    ) -> DomainResult<Vec<GenreRelation>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        lock_film(&mut tx, film_id).await?;
        ensure_genres_exist(&mut tx, genres).await?;

        sqlx::query("DELETE FROM genre_relations WHERE film_id = $1")
            .bind(i64::from(film_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let created = insert_genre_links(&mut tx, film_id, genres.as_slice()).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn list_casting_relations(
        &self,
        film_id: Option<FilmId>,
    ) -> DomainResult<Vec<CastingRelationDetail>> {
        let rows = sqlx::query_as::<_, CastingRelationDetailRow>(
            "SELECT cr.id, cr.film_id, cr.casting_id, cr.role,
                    c.real_name, c.stage_name, c.photo
             FROM casting_relations cr
             JOIN castings c ON c.id = cr.casting_id
             WHERE $1::BIGINT IS NULL OR cr.film_id = $1
             ORDER BY cr.film_id, cr.id",
        )
        .bind(film_id.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CastingRelationDetail::try_from).collect()
    }

    async fn find_casting_relation(
        &self,
        id: CastingRelationId,
    ) -> DomainResult<Option<CastingRelation>> {
        let row = sqlx::query_as::<_, CastingRelationRow>(
            "SELECT id, film_id, casting_id, role FROM casting_relations WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CastingRelation::try_from).transpose()
    }

    async fn create_casting_relation(
        &self,
        film_id: FilmId,
        assignment: CastingAssignment,
    ) -> DomainResult<CastingRelation> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        insert_casting_link(&mut conn, film_id, &assignment).await
    }

    async fn update_casting_role(
        &self,
        id: CastingRelationId,
        role: CastingRole,
    ) -> DomainResult<CastingRelation> {
        let row = sqlx::query_as::<_, CastingRelationRow>(
            "UPDATE casting_relations SET role = $1 WHERE id = $2
             RETURNING id, film_id, casting_id, role",
        )
        .bind(role.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("casting relation not found".into()))?;

        CastingRelation::try_from(row)
    }

    async fn delete_casting_relation(&self, id: CastingRelationId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM casting_relations WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("casting relation not found".into()));
        }
        Ok(())
    }

    async fn sync_castings(
        &self,
        film_id: FilmId,
        lineup: &CastingLineup,
    ) -> DomainResult<Vec<CastingRelation>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        lock_film(&mut tx, film_id).await?;

        let original = sqlx::query_as::<_, CastingRelationRow>(
            "SELECT id, film_id, casting_id, role FROM casting_relations
             WHERE film_id = $1 ORDER BY id",
        )
        .bind(i64::from(film_id))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(CastingRelation::try_from)
        .collect::<DomainResult<Vec<_>>>()?;

        let plan = CastingPlan::diff(&original, lineup);

        if !plan.delete.is_empty() {
            let ids: Vec<i64> = plan.delete.iter().map(|id| i64::from(*id)).collect();
            sqlx::query("DELETE FROM casting_relations WHERE id = ANY($1)")
                .bind(&ids)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }
        for (id, role) in &plan.update_roles {
            sqlx::query("UPDATE casting_relations SET role = $1 WHERE id = $2")
                .bind(role.as_str())
                .bind(i64::from(*id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }
        for assignment in &plan.create {
            insert_casting_link(&mut tx, film_id, assignment).await?;
        }
        apply_photo_overrides(&mut tx, lineup).await?;

        let current = sqlx::query_as::<_, CastingRelationRow>(
            "SELECT id, film_id, casting_id, role FROM casting_relations
             WHERE film_id = $1 ORDER BY id",
        )
        .bind(i64::from(film_id))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        tracing::debug!(
            film_id = %film_id,
            created = plan.create.len(),
            updated = plan.update_roles.len(),
            deleted = plan.delete.len(),
            "casting relations synchronized"
        );
        current.into_iter().map(CastingRelation::try_from).collect()
    }
}
