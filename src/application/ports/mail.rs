use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct PasswordResetMail {
    pub to: String,
    pub name: String,
    pub reset_link: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_password_reset(&self, mail: PasswordResetMail) -> ApplicationResult<()>;
}
