// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256 access tokens carrying the user id and role.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration) -> ApplicationResult<Self> {
        if secret.len() < 32 {
            return Err(ApplicationError::infrastructure(
                "token secret must be at least 32 bytes",
            ));
        }
        if ttl <= Duration::zero() {
            return Err(ApplicationError::infrastructure("token ttl must be positive"));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub", "iat"]);
        validation
    }
}

fn timestamp(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthenticated("invalid token"))
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let claims = AccessClaims {
            sub: subject.user_id.to_string(),
            role: subject.role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<AccessClaims>(token, &self.decoding, &Self::validation())
            .map_err(|err| {
                tracing::debug!(error = %err, "rejected access token");
                ApplicationError::unauthenticated("invalid or expired token")
            })?;
        let claims = data.claims;

        let id = claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthenticated("invalid token subject"))?;
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|_| ApplicationError::unauthenticated("invalid token role"))?;

        Ok(AuthenticatedUser {
            id,
            role,
            capabilities: role.default_capabilities(),
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Action, Resource};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn manager() -> JwtTokenManager {
        JwtTokenManager::new(SECRET, Duration::hours(1)).unwrap()
    }

    #[tokio::test]
    async fn issued_token_authenticates_with_role_capabilities() {
        let tm = manager();
        let subject = TokenSubject {
            user_id: UserId::new(42).unwrap(),
            role: Role::Author,
        };
        let issued = tm.issue(subject).await.unwrap();
        assert_eq!(issued.expires_in, 3600);

        let auth = tm.authenticate(&issued.token).await.unwrap();
        assert_eq!(auth.id, UserId::new(42).unwrap());
        assert_eq!(auth.role, Role::Author);
        assert!(auth.has_capability(Resource::Films, Action::Create));
        assert!(!auth.has_capability(Resource::Users, Action::Read));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenManager::new("ffffffffffffffffffffffffffffffff", Duration::hours(1))
            .unwrap();
        let issued = other
            .issue(TokenSubject {
                user_id: UserId::new(1).unwrap(),
                role: Role::Admin,
            })
            .await
            .unwrap();
        let err = manager().authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let claims = AccessClaims {
            sub: "1".into(),
            role: "USER".into(),
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let err = manager().authenticate(&token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        assert!(manager().authenticate("not-a-jwt").await.is_err());
    }

    #[test]
    fn short_secret_is_refused() {
        assert!(JwtTokenManager::new("short", Duration::hours(1)).is_err());
    }
}
