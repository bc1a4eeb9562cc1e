// src/infrastructure/repositories/postgres_password_reset.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::password_reset::{NewPasswordReset, PasswordReset, PasswordResetRepository};
use crate::domain::user::{PasswordHash, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPasswordResetRepository {
    pool: PgPool,
}

impl PostgresPasswordResetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PasswordResetRow {
    id: i64,
    user_id: i64,
    token_hash: String,
    expires_at: DateTime<Utc>,
    used: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<PasswordResetRow> for PasswordReset {
    type Error = DomainError;

    fn try_from(row: PasswordResetRow) -> Result<Self, Self::Error> {
        Ok(PasswordReset {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            token_hash: row.token_hash,
            expires_at: row.expires_at,
            used: row.used,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PasswordResetRepository for PostgresPasswordResetRepository {
    async fn issue(&self, reset: NewPasswordReset) -> DomainResult<PasswordReset> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("UPDATE password_resets SET used = TRUE WHERE user_id = $1 AND used = FALSE")
            .bind(i64::from(reset.user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PasswordResetRow>(
            "INSERT INTO password_resets (user_id, token_hash, expires_at, used, created_at)
             VALUES ($1, $2, $3, FALSE, $4)
             RETURNING id, user_id, token_hash, expires_at, used, created_at",
        )
        .bind(i64::from(reset.user_id))
        .bind(&reset.token_hash)
        .bind(reset.expires_at)
        .bind(reset.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        PasswordReset::try_from(row)
    }

    async fn redeem(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
        password_hash: PasswordHash,
    ) -> DomainResult<UserId> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let grant = sqlx::query_as::<_, PasswordResetRow>(
            "SELECT id, user_id, token_hash, expires_at, used, created_at
             FROM password_resets WHERE token_hash = $1 FOR UPDATE",
        )
        .bind(token_hash)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .map(PasswordReset::try_from)
        .transpose()?
        .filter(|grant| grant.is_redeemable(now))
        .ok_or_else(|| DomainError::NotFound("reset token is invalid or expired".into()))?;

        sqlx::query("UPDATE password_resets SET used = TRUE WHERE id = $1")
            .bind(grant.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(password_hash.as_str())
            .bind(i64::from(grant.user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(grant.user_id)
    }
}
