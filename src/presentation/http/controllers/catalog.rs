// src/presentation/http/controllers/catalog.rs
use crate::application::{
    commands::catalog::{
        CreateCastingCommand, CreateGenreCommand, RenameGenreCommand, UpdateCastingCommand,
    },
    dto::{CastingDto, GenreDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use super::double_option;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenreRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCastingRequest {
    pub real_name: String,
    pub stage_name: String,
    pub photo: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCastingRequest {
    pub real_name: Option<String>,
    pub stage_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
}

#[utoipa::path(
    get,
    path = "/genre",
    responses((status = 200, description = "All genres by name.", body = [GenreDto])),
    tag = "Catalog"
)]
pub async fn list_genres(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<GenreDto>>> {
    state
        .services
        .catalog_queries
        .list_genres()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/genre/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    responses(
        (status = 200, description = "Genre.", body = GenreDto),
        (status = 404, description = "Unknown genre.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_genre(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<GenreDto>> {
    state
        .services
        .catalog_queries
        .get_genre(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/genre",
    request_body = GenreRequest,
    responses(
        (status = 201, description = "Genre created.", body = GenreDto),
        (status = 400, description = "Blank or duplicate name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthenticated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Role may not manage genres.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn create_genre(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<GenreRequest>,
) -> HttpResult<(StatusCode, Json<GenreDto>)> {
    let genre = state
        .services
        .catalog_commands
        .create_genre(&user, CreateGenreCommand { name: payload.name })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(genre)))
}

#[utoipa::path(
    put,
    path = "/genre/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    request_body = GenreRequest,
    responses(
        (status = 200, description = "Genre renamed.", body = GenreDto),
        (status = 400, description = "Blank or duplicate name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Role may not manage genres.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown genre.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn rename_genre(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<GenreRequest>,
) -> HttpResult<Json<GenreDto>> {
    state
        .services
        .catalog_commands
        .rename_genre(&user, RenameGenreCommand { id, name: payload.name })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/genre/{id}",
    params(("id" = i64, Path, description = "Genre identifier")),
    responses(
        (status = 204, description = "Genre and its film relations deleted."),
        (status = 403, description = "Role may not manage genres.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown genre.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn delete_genre(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .catalog_commands
        .delete_genre(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/casting",
    responses((status = 200, description = "All cast members.", body = [CastingDto])),
    tag = "Catalog"
)]
pub async fn list_castings(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CastingDto>>> {
    state
        .services
        .catalog_queries
        .list_castings()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/casting/{id}",
    params(("id" = i64, Path, description = "Casting identifier")),
    responses(
        (status = 200, description = "Cast member.", body = CastingDto),
        (status = 404, description = "Unknown cast member.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_casting(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CastingDto>> {
    state
        .services
        .catalog_queries
        .get_casting(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/casting",
    request_body = CreateCastingRequest,
    responses(
        (status = 201, description = "Cast member created.", body = CastingDto),
        (status = 400, description = "Blank name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthenticated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Role may not manage castings.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn create_casting(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCastingRequest>,
) -> HttpResult<(StatusCode, Json<CastingDto>)> {
    let command = CreateCastingCommand {
        real_name: payload.real_name,
        stage_name: payload.stage_name,
        photo: payload.photo,
    };
    let casting = state
        .services
        .catalog_commands
        .create_casting(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(casting)))
}

#[utoipa::path(
    put,
    path = "/casting/{id}",
    params(("id" = i64, Path, description = "Casting identifier")),
    request_body = UpdateCastingRequest,
    responses(
        (status = 200, description = "Cast member updated.", body = CastingDto),
        (status = 400, description = "Blank name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Role may not manage castings.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown cast member.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn update_casting(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCastingRequest>,
) -> HttpResult<Json<CastingDto>> {
    let command = UpdateCastingCommand {
        id,
        real_name: payload.real_name,
        stage_name: payload.stage_name,
        photo: payload.photo,
    };
    state
        .services
        .catalog_commands
        .update_casting(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/casting/{id}",
    params(("id" = i64, Path, description = "Casting identifier")),
    responses(
        (status = 204, description = "Cast member and its film relations deleted."),
        (status = 403, description = "Role may not manage castings.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown cast member.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn delete_casting(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .catalog_commands
        .delete_casting(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
