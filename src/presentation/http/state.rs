// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use sqlx::PgPool;
use std::{path::PathBuf, sync::Arc};

/// Router-level settings that do not belong to any use case.
#[derive(Clone, Debug)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub upload_dir: PathBuf,
    /// Adds `Secure` to the login cookie.
    pub secure_cookies: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            upload_dir: PathBuf::from("./uploads"),
            secure_cookies: false,
        }
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub db_pool: PgPool,
    pub settings: HttpSettings,
}
