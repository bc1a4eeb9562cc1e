use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{
    mail::Mailer,
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::{password_reset::PasswordResetRepository, user::UserRepository};

/// How reset grants are issued: their lifetime and the page the mailed link points to.
#[derive(Debug, Clone)]
pub struct PasswordResetSettings {
    pub ttl: Duration,
    pub link_base: String,
}

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) reset_repo: Arc<dyn PasswordResetRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) reset_settings: PasswordResetSettings,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        reset_repo: Arc<dyn PasswordResetRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        reset_settings: PasswordResetSettings,
    ) -> Self {
        Self {
            user_repo,
            reset_repo,
            password_hasher,
            token_manager,
            mailer,
            clock,
            reset_settings,
        }
    }
}
