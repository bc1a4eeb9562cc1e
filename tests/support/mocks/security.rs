// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use eijafilm::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use eijafilm::domain::user::{Role, UserId};

use super::time::fixed_now;

/// Reversible "hash" so tests can assert on stored passwords.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthenticated("invalid credentials"))
        }
    }
}

/// Tokens of the form `user:<id>:<ROLE>`; anything else is rejected.
pub struct FakeTokenManager;

pub fn token_for(id: i64, role: Role) -> String {
    format!("user:{id}:{}", role.as_str())
}

pub fn bearer(id: i64, role: Role) -> String {
    format!("Bearer {}", token_for(id, role))
}

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id.into(), subject.role),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let mut parts = token.split(':');
        let (Some("user"), Some(id), Some(role), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ApplicationError::unauthenticated("invalid token"));
        };
        let id = id
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| ApplicationError::unauthenticated("invalid token"))?;
        let role: Role = role
            .parse()
            .map_err(|_| ApplicationError::unauthenticated("invalid token"))?;
        Ok(actor_with(id, role))
    }
}

fn actor_with(id: UserId, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id,
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Principal as the services see it after token verification.
pub fn actor(id: i64, role: Role) -> AuthenticatedUser {
    actor_with(UserId::new(id).unwrap(), role)
}
