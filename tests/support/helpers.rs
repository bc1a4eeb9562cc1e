// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    response::Response,
};
use chrono::Duration;
use eijafilm::application::{
    commands::{
        films::CreateFilmCommand,
        users::{PasswordResetSettings, RegisterUserCommand},
    },
    dto::UserDto,
    services::{Adapters, ApplicationServices},
};
use eijafilm::domain::film::Category;
use eijafilm::infrastructure::util::DefaultSlugGenerator;
use eijafilm::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;

use super::mocks::{
    CapturingMailer, FakeTokenManager, ManualClock, MemoryDb, MemoryStorage, PlainPasswordHasher,
};

/// Services wired to in-memory adapters, with handles to inspect them.
pub struct TestApp {
    pub db: MemoryDb,
    pub mailer: Arc<CapturingMailer>,
    pub storage: Arc<MemoryStorage>,
    pub clock: Arc<ManualClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let db = MemoryDb::new();
        let mailer = Arc::new(CapturingMailer::default());
        let storage = Arc::new(MemoryStorage::default());
        let clock = Arc::new(ManualClock::new());

        let adapters = Adapters {
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(FakeTokenManager),
            mailer: mailer.clone(),
            media_storage: storage.clone(),
            clock: clock.clone(),
            slugger: Arc::new(DefaultSlugGenerator),
        };
        let services = Arc::new(ApplicationServices::new(
            db.repositories(),
            adapters,
            PasswordResetSettings {
                ttl: Duration::hours(1),
                link_base: "http://frontend.test".into(),
            },
        ));

        Self {
            db,
            mailer,
            storage,
            clock,
            services,
        }
    }

    /// Router over these services. The pool connects lazily, so only the readiness probe
    /// ever touches it.
    pub fn router(&self) -> axum::Router {
        let db_pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/eijafilm_test")
            .expect("connect_lazy");
        let state = HttpState {
            services: Arc::clone(&self.services),
            db_pool,
            settings: HttpSettings {
                upload_dir: std::env::temp_dir(),
                ..HttpSettings::default()
            },
        };
        build_router_with_rate_limiter(state, false)
    }

    pub async fn register(&self, name: &str, email: &str) -> UserDto {
        self.services
            .user_commands
            .register(RegisterUserCommand {
                name: name.into(),
                email: email.into(),
                password: "popcorn42".into(),
            })
            .await
            .expect("register")
    }
}

/// A movie with no relations.
pub fn movie(title: &str) -> CreateFilmCommand {
    CreateFilmCommand {
        title: title.into(),
        description: format!("About {title}"),
        category: Category::Movie,
        episode: None,
        poster_url: None,
        trailer_url: None,
        duration: Some(120),
        release_year: Some(1999),
        genre_ids: vec![],
        castings: vec![],
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).expect("request")
}

/// Asserts an `ErrorResponse` body with the given status and `error` field.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = body_json(resp).await;
    let error = json.get("error").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(error, expected_error, "unexpected error field: {json}");
    assert!(!message.is_empty(), "expected non-empty message: {json}");
}
