use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::mail::PasswordResetMail,
    },
    domain::{
        errors::DomainError,
        password_reset::NewPasswordReset,
        user::{Email, PasswordHash},
    },
};

pub struct ForgotPasswordCommand {
    pub email: String,
}

pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
}

pub(crate) fn hash_reset_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

impl UserCommandService {
    /// Issues a reset grant and mails the link. Succeeds whether or not the address
    /// belongs to an account.
    pub async fn forgot_password(&self, command: ForgotPasswordCommand) -> ApplicationResult<()> {
        let Ok(email) = Email::new(command.email) else {
            return Ok(());
        };
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!("password reset requested for unknown address");
            return Ok(());
        };
        if !user.is_active {
            return Ok(());
        }

        let token = Uuid::new_v4().simple().to_string();
        let now = self.clock.now();
        self.reset_repo
            .issue(NewPasswordReset {
                user_id: user.id,
                token_hash: hash_reset_token(&token),
                expires_at: now + self.reset_settings.ttl,
                created_at: now,
            })
            .await?;

        let link = format!(
            "{}/reset-password?token={token}",
            self.reset_settings.link_base.trim_end_matches('/')
        );
        self.mailer
            .send_password_reset(PasswordResetMail {
                to: email.into(),
                name: user.name.into(),
                reset_link: link,
            })
            .await?;
        tracing::info!(user_id = %user.id, "password reset issued");

        Ok(())
    }

    pub async fn reset_password(&self, command: ResetPasswordCommand) -> ApplicationResult<()> {
        let token = command.token.trim();
        if token.is_empty() {
            return Err(ApplicationError::validation("reset token is required"));
        }
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user_id = self
            .reset_repo
            .redeem(&hash_reset_token(token), self.clock.now(), password_hash)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => {
                    ApplicationError::validation("reset token is invalid or expired")
                }
                other => other.into(),
            })?;
        tracing::info!(user_id = %user_id, "password reset completed");

        Ok(())
    }
}
