// src/infrastructure/mail.rs
use crate::application::{
    ApplicationResult,
    ports::mail::{Mailer, PasswordResetMail},
};
use async_trait::async_trait;

/// Delivers mail to the log. Stands in for an SMTP relay in development and tests.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(&self, mail: PasswordResetMail) -> ApplicationResult<()> {
        tracing::info!(
            to = %mail.to,
            name = %mail.name,
            link = %mail.reset_link,
            "password reset mail queued"
        );
        Ok(())
    }
}
