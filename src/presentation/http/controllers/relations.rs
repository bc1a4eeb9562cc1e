// src/presentation/http/controllers/relations.rs
use crate::application::{
    commands::relations::{
        CreateCastingRelationCommand, CreateGenreRelationsCommand, ReplaceGenresCommand,
        SyncCastingsCommand, UpdateCastingRelationCommand,
    },
    dto::{CastingRelationDto, GenreRelationDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::{FilmFilter, films::CastingAssignmentRequest};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreRelationRequest {
    pub film_id: i64,
    pub genre_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceGenresRequest {
    pub film_id: i64,
    pub genre_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCastingRelationRequest {
    pub film_id: i64,
    pub casting_id: i64,
    pub role: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCastingRelationRequest {
    pub role: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncCastingsRequest {
    pub film_id: i64,
    pub castings: Vec<CastingAssignmentRequest>,
}

#[utoipa::path(
    get,
    path = "/genre-relation",
    params(FilmFilter),
    responses((status = 200, description = "Genre relations with their genre.", body = [GenreRelationDto])),
    tag = "Relations"
)]
pub async fn list_genre_relations(
    Extension(state): Extension<HttpState>,
    Query(filter): Query<FilmFilter>,
) -> HttpResult<Json<Vec<GenreRelationDto>>> {
    state
        .services
        .relation_queries
        .list_genre_relations(filter.film_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/genre-relation",
    request_body = [GenreRelationRequest],
    responses(
        (status = 201, description = "Relations created.", body = [GenreRelationDto]),
        (status = 400, description = "Empty list or duplicate relation.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the film owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film or genre.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn create_genre_relations(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<Vec<GenreRelationRequest>>,
) -> HttpResult<(StatusCode, Json<Vec<GenreRelationDto>>)> {
    let command = CreateGenreRelationsCommand {
        pairs: payload
            .into_iter()
            .map(|pair| (pair.film_id, pair.genre_id))
            .collect(),
    };
    let created = state
        .services
        .relation_commands
        .create_genre_relations(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/genre-relation",
    request_body = ReplaceGenresRequest,
    responses(
        (status = 200, description = "The film's genre set after replacement.", body = [GenreRelationDto]),
        (status = 403, description = "Not the film owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film or genre.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn replace_genres(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ReplaceGenresRequest>,
) -> HttpResult<Json<Vec<GenreRelationDto>>> {
    let command = ReplaceGenresCommand {
        film_id: payload.film_id,
        genre_ids: payload.genre_ids,
    };
    state
        .services
        .relation_commands
        .replace_film_genres(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/casting-relation",
    params(FilmFilter),
    responses((status = 200, description = "Casting relations with their cast member.", body = [CastingRelationDto])),
    tag = "Relations"
)]
pub async fn list_casting_relations(
    Extension(state): Extension<HttpState>,
    Query(filter): Query<FilmFilter>,
) -> HttpResult<Json<Vec<CastingRelationDto>>> {
    state
        .services
        .relation_queries
        .list_casting_relations(filter.film_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/casting-relation",
    request_body = CreateCastingRelationRequest,
    responses(
        (status = 201, description = "Relation created.", body = CastingRelationDto),
        (status = 400, description = "Blank role or cast member already on the film.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the film owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film or cast member.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn create_casting_relation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCastingRelationRequest>,
) -> HttpResult<(StatusCode, Json<CastingRelationDto>)> {
    let command = CreateCastingRelationCommand {
        film_id: payload.film_id,
        casting_id: payload.casting_id,
        role: payload.role,
    };
    let created = state
        .services
        .relation_commands
        .create_casting_relation(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/casting-relation",
    request_body = SyncCastingsRequest,
    responses(
        (status = 200, description = "The film's cast after the diff was applied.", body = [CastingRelationDto]),
        (status = 400, description = "Blank role or duplicate cast member.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the film owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film or cast member.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn sync_castings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SyncCastingsRequest>,
) -> HttpResult<Json<Vec<CastingRelationDto>>> {
    let command = SyncCastingsCommand {
        film_id: payload.film_id,
        castings: payload.castings.into_iter().map(Into::into).collect(),
    };
    state
        .services
        .relation_commands
        .sync_film_castings(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/casting-relation/{id}",
    params(("id" = i64, Path, description = "Casting relation identifier")),
    request_body = UpdateCastingRelationRequest,
    responses(
        (status = 200, description = "Role updated.", body = CastingRelationDto),
        (status = 403, description = "Not the film owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown relation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn update_casting_relation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCastingRelationRequest>,
) -> HttpResult<Json<CastingRelationDto>> {
    state
        .services
        .relation_commands
        .update_casting_relation(
            &user,
            UpdateCastingRelationCommand {
                id,
                role: payload.role,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/casting-relation/{id}",
    params(("id" = i64, Path, description = "Casting relation identifier")),
    responses(
        (status = 204, description = "Relation deleted."),
        (status = 403, description = "Not the film owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown relation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn delete_casting_relation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .relation_commands
        .delete_casting_relation(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
