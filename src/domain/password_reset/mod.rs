use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::DomainResult;
use crate::domain::user::{PasswordHash, UserId};

/// A single-use password reset grant. Only a hash of the token is stored.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub id: i64,
    pub user_id: UserId,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl PasswordReset {
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        !self.used && now < self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NewPasswordReset {
    pub user_id: UserId,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    /// Marks every unused grant of the user as used, then stores the new one.
    async fn issue(&self, reset: NewPasswordReset) -> DomainResult<PasswordReset>;

    /// Consumes the grant matching `token_hash` and sets the user's password in one
    /// transaction. Unknown, expired and already used grants yield `NotFound`.
    async fn redeem(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
        password_hash: PasswordHash,
    ) -> DomainResult<UserId>;
}
