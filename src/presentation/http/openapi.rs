// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::controllers::{auth, catalog, films, relations, reviews, upload, users};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::forgot_password,
        auth::reset_password,
        auth::profile,
        users::list_users,
        users::update_user,
        users::delete_user,
        users::update_me,
        films::list_films,
        films::get_film,
        films::get_film_by_slug,
        films::create_film,
        films::update_film,
        films::delete_film,
        catalog::list_genres,
        catalog::get_genre,
        catalog::create_genre,
        catalog::rename_genre,
        catalog::delete_genre,
        catalog::list_castings,
        catalog::get_casting,
        catalog::create_casting,
        catalog::update_casting,
        catalog::delete_casting,
        relations::list_genre_relations,
        relations::create_genre_relations,
        relations::replace_genres,
        relations::list_casting_relations,
        relations::create_casting_relation,
        relations::sync_castings,
        relations::update_casting_relation,
        relations::delete_casting_relation,
        reviews::list_comments,
        reviews::submit_comment,
        reviews::update_comment,
        reviews::delete_comment,
        reviews::list_ratings,
        reviews::create_rating,
        reviews::update_rating,
        reviews::delete_rating,
        upload::upload,
        super::routes::health,
        super::routes::readiness
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::RegisterRequest,
            auth::RegisterResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::ForgotPasswordRequest,
            auth::ResetPasswordRequest,
            users::UpdateUserRequest,
            users::UpdateProfileRequest,
            films::CreateFilmRequest,
            films::UpdateFilmRequest,
            films::CastingAssignmentRequest,
            catalog::GenreRequest,
            catalog::CreateCastingRequest,
            catalog::UpdateCastingRequest,
            relations::GenreRelationRequest,
            relations::ReplaceGenresRequest,
            relations::CreateCastingRelationRequest,
            relations::UpdateCastingRelationRequest,
            relations::SyncCastingsRequest,
            reviews::SubmitCommentRequest,
            reviews::UpdateCommentRequest,
            reviews::CreateRatingRequest,
            reviews::UpdateRatingRequest,
            upload::UploadForm,
            upload::UploadResponse,
            crate::domain::film::Category,
            crate::domain::user::Role,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::FilmDto,
            crate::application::dto::FilmSummaryDto,
            crate::application::dto::FilmDetailDto,
            crate::application::dto::GenreDto,
            crate::application::dto::CastingDto,
            crate::application::dto::GenreRelationDto,
            crate::application::dto::CastingRelationDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentAuthorDto,
            crate::application::dto::CommentEntryDto,
            crate::application::dto::RatingDto,
            crate::application::dto::SubmittedCommentDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and password reset"),
        (name = "Users", description = "Account administration and self-service profile"),
        (name = "Films", description = "Films, series and anime"),
        (name = "Catalog", description = "Genres and cast members"),
        (name = "Relations", description = "Film to genre and film to cast links"),
        (name = "Reviews", description = "Comments and ratings"),
        (name = "Media", description = "Image and video uploads"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "EijaFilm API",
        description = "Movie, series and anime catalog backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .into_iter()
            .collect();
        urls.push("http://127.0.0.1:8080".to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
