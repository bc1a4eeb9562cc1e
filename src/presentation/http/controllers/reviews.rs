// src/presentation/http/controllers/reviews.rs
use crate::application::{
    commands::reviews::{
        CreateRatingCommand, SubmitCommentCommand, UpdateCommentCommand, UpdateRatingCommand,
    },
    dto::{CommentDto, CommentEntryDto, RatingDto, SubmittedCommentDto},
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

use super::FilmFilter;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCommentRequest {
    pub film_id: i64,
    pub content: String,
    /// Makes the comment a reply. Replies cannot carry a score.
    pub reply_to_comment_id: Option<i64>,
    /// 1 to 5; stored as the author's rating of the film.
    pub score: Option<i16>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    pub film_id: i64,
    /// The caller's own top-level comment on the film.
    pub comment_id: Option<i64>,
    pub score: i16,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRatingRequest {
    pub score: i16,
}

#[utoipa::path(
    get,
    path = "/comment",
    params(FilmFilter),
    responses((status = 200, description = "Comments, oldest first, with author and rating.", body = [CommentEntryDto])),
    tag = "Reviews"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Query(filter): Query<FilmFilter>,
) -> HttpResult<Json<Vec<CommentEntryDto>>> {
    state
        .services
        .review_queries
        .list_comments(filter.film_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/comment",
    request_body = SubmitCommentRequest,
    responses(
        (status = 201, description = "Comment stored, with its rating when a score was given.", body = SubmittedCommentDto),
        (status = 400, description = "Invalid content, score or reply target; or already commented/rated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthenticated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film or parent comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubmitCommentRequest>,
) -> HttpResult<(StatusCode, Json<SubmittedCommentDto>)> {
    let command = SubmitCommentCommand {
        film_id: payload.film_id,
        content: payload.content,
        reply_to_comment_id: payload.reply_to_comment_id,
        score: payload.score,
    };
    let submitted = state
        .services
        .review_commands
        .submit_comment(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(submitted)))
}

#[utoipa::path(
    put,
    path = "/comment/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment edited.", body = CommentDto),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .review_commands
        .update_comment(
            &user,
            UpdateCommentCommand {
                id,
                content: payload.content,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/comment/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment, its replies and their ratings deleted."),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .review_commands
        .delete_comment(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/rating",
    params(FilmFilter),
    responses((status = 200, description = "Ratings.", body = [RatingDto])),
    tag = "Reviews"
)]
pub async fn list_ratings(
    Extension(state): Extension<HttpState>,
    Query(filter): Query<FilmFilter>,
) -> HttpResult<Json<Vec<RatingDto>>> {
    state
        .services
        .review_queries
        .list_ratings(filter.film_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/rating",
    request_body = CreateRatingRequest,
    responses(
        (status = 201, description = "Rating stored.", body = RatingDto),
        (status = 400, description = "Missing comment, bad score, or already rated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthenticated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown film or comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn create_rating(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateRatingRequest>,
) -> HttpResult<(StatusCode, Json<RatingDto>)> {
    let command = CreateRatingCommand {
        film_id: payload.film_id,
        comment_id: payload.comment_id,
        score: payload.score,
    };
    let rating = state
        .services
        .review_commands
        .create_rating(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(rating)))
}

#[utoipa::path(
    put,
    path = "/rating/{id}",
    params(("id" = i64, Path, description = "Rating identifier")),
    request_body = UpdateRatingRequest,
    responses(
        (status = 200, description = "Score changed.", body = RatingDto),
        (status = 400, description = "Score out of range.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the rater.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown rating.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn update_rating(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRatingRequest>,
) -> HttpResult<Json<RatingDto>> {
    state
        .services
        .review_commands
        .update_rating(
            &user,
            UpdateRatingCommand {
                id,
                score: payload.score,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/rating/{id}",
    params(("id" = i64, Path, description = "Rating identifier")),
    responses(
        (status = 204, description = "Rating deleted."),
        (status = 403, description = "Not the rater.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown rating.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn delete_rating(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .review_commands
        .delete_rating(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
