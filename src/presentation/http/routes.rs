// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, catalog, films, relations, reviews, upload, users},
    middleware::rate_limit::auth_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

/// Upper bound for request bodies; sized for video uploads.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let mut auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/reset-password", post(auth::reset_password));
    if rate_limit && let Some(layer) = auth_rate_limit_layer() {
        auth_routes = auth_routes.layer(layer);
    }

    let api = Router::new()
        .route("/auth/me", get(auth::profile))
        .route("/users", get(users::list_users))
        .route("/users/me", put(users::update_me))
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route("/film", get(films::list_films).post(films::create_film))
        .route(
            "/film/{id}",
            get(films::get_film)
                .put(films::update_film)
                .delete(films::delete_film),
        )
        .route("/films/{slug}", get(films::get_film_by_slug))
        .route(
            "/genre",
            get(catalog::list_genres).post(catalog::create_genre),
        )
        .route(
            "/genre/{id}",
            get(catalog::get_genre)
                .put(catalog::rename_genre)
                .delete(catalog::delete_genre),
        )
        .route(
            "/casting",
            get(catalog::list_castings).post(catalog::create_casting),
        )
        .route(
            "/casting/{id}",
            get(catalog::get_casting)
                .put(catalog::update_casting)
                .delete(catalog::delete_casting),
        )
        .route(
            "/genre-relation",
            get(relations::list_genre_relations)
                .post(relations::create_genre_relations)
                .put(relations::replace_genres),
        )
        .route(
            "/casting-relation",
            get(relations::list_casting_relations)
                .post(relations::create_casting_relation)
                .put(relations::sync_castings),
        )
        .route(
            "/casting-relation/{id}",
            put(relations::update_casting_relation).delete(relations::delete_casting_relation),
        )
        .route(
            "/comment",
            get(reviews::list_comments).post(reviews::submit_comment),
        )
        .route(
            "/comment/{id}",
            put(reviews::update_comment).delete(reviews::delete_comment),
        )
        .route(
            "/rating",
            get(reviews::list_ratings).post(reviews::create_rating),
        )
        .route(
            "/rating/{id}",
            put(reviews::update_rating).delete(reviews::delete_rating),
        )
        .route("/upload", post(upload::upload));

    let uploads = ServeDir::new(&state.settings.upload_dir);
    let cors = cors_layer(&state.settings.allowed_origins);

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(auth_routes)
        .merge(api)
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Credentialed CORS: the login cookie only travels to explicitly listed origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service liveness check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Database reachable.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 503, description = "Database unreachable.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn readiness(Extension(state): Extension<HttpState>) -> (StatusCode, Json<StatusResponse>) {
    match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ready".into(),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable".into(),
                }),
            )
        }
    }
}
