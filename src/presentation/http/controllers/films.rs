// src/presentation/http/controllers/films.rs
use crate::application::{
    commands::{
        CastingAssignmentInput,
        films::{CreateFilmCommand, DeleteFilmCommand, UpdateFilmCommand},
    },
    dto::{FilmDetailDto, FilmDto, FilmSummaryDto},
    queries::films::{GetFilmByIdQuery, GetFilmBySlugQuery},
};
use crate::domain::film::Category;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use super::double_option;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastingAssignmentRequest {
    pub casting_id: i64,
    pub role: String,
    /// Replaces the cast member's shared photo.
    pub photo: Option<String>,
}

impl From<CastingAssignmentRequest> for CastingAssignmentInput {
    fn from(value: CastingAssignmentRequest) -> Self {
        Self {
            casting_id: value.casting_id,
            role: value.role,
            photo: value.photo,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub episode: Option<i32>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub castings: Vec<CastingAssignmentRequest>,
}

/// Absent fields are kept; `null` clears the optional ones.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub episode: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub poster_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub trailer_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub duration: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub release_year: Option<Option<i32>>,
}

#[utoipa::path(
    get,
    path = "/film",
    responses(
        (status = 200, description = "Films, newest first, with their genre relations.", body = [FilmSummaryDto])
    ),
    tag = "Films"
)]
pub async fn list_films(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<FilmSummaryDto>>> {
    state
        .services
        .film_queries
        .list_films()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/film/{id}",
    params(("id" = i64, Path, description = "Film identifier")),
    responses(
        (status = 200, description = "Film with its genre relations.", body = FilmSummaryDto),
        (status = 404, description = "Unknown film.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Films"
)]
pub async fn get_film(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<FilmSummaryDto>> {
    state
        .services
        .film_queries
        .get_film(GetFilmByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/films/{slug}",
    params(("slug" = String, Path, description = "Film slug")),
    responses(
        (status = 200, description = "Film page: relations, comments and average rating.", body = FilmDetailDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Films"
)]
pub async fn get_film_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<FilmDetailDto>> {
    state
        .services
        .film_queries
        .get_film_by_slug(GetFilmBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/film",
    request_body = CreateFilmRequest,
    responses(
        (status = 201, description = "Film created with its genres and cast.", body = FilmDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthenticated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Role may not create films.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown genre or casting.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Films"
)]
pub async fn create_film(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateFilmRequest>,
) -> HttpResult<(StatusCode, Json<FilmDto>)> {
    let command = CreateFilmCommand {
        title: payload.title,
        description: payload.description,
        category: payload.category,
        episode: payload.episode,
        poster_url: payload.poster_url,
        trailer_url: payload.trailer_url,
        duration: payload.duration,
        release_year: payload.release_year,
        genre_ids: payload.genre_ids,
        castings: payload.castings.into_iter().map(Into::into).collect(),
    };

    let film = state
        .services
        .film_commands
        .create_film(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(film)))
}

#[utoipa::path(
    put,
    path = "/film/{id}",
    params(("id" = i64, Path, description = "Film identifier")),
    request_body = UpdateFilmRequest,
    responses(
        (status = 200, description = "Film updated.", body = FilmDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Films"
)]
pub async fn update_film(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFilmRequest>,
) -> HttpResult<Json<FilmDto>> {
    let command = UpdateFilmCommand {
        id,
        title: payload.title,
        description: payload.description,
        category: payload.category,
        episode: payload.episode,
        poster_url: payload.poster_url,
        trailer_url: payload.trailer_url,
        duration: payload.duration,
        release_year: payload.release_year,
    };

    state
        .services
        .film_commands
        .update_film(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/film/{id}",
    params(("id" = i64, Path, description = "Film identifier")),
    responses(
        (status = 204, description = "Film and everything attached to it deleted."),
        (status = 403, description = "Not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Films"
)]
pub async fn delete_film(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .film_commands
        .delete_film(&user, DeleteFilmCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
