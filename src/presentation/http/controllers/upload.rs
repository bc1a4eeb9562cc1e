// src/presentation/http/controllers/upload.rs
use crate::application::ports::storage::MediaUpload;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};
use serde::Serialize;
use utoipa::ToSchema;

const FILE_FIELDS: [&str; 2] = ["file", "image"];

/// Multipart body of `/upload`.
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// Takes the first part named `file` or `image`.
async fn read_upload(mut multipart: Multipart) -> HttpResult<Option<MediaUpload>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        if !field.name().is_some_and(|name| FILE_FIELDS.contains(&name)) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;
        return Ok(Some(MediaUpload {
            file_name,
            content_type,
            data,
        }));
    }
    Ok(None)
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data", description = "Image or video in a `file` part."),
    responses(
        (status = 200, description = "Stored; the URL is served under /uploads.", body = UploadResponse),
        (status = 400, description = "No file or unsupported media type.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthenticated.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Media"
)]
pub async fn upload(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<UploadResponse>> {
    let upload = read_upload(multipart).await?;
    let image_url = state
        .services
        .media_commands
        .upload(&user, upload)
        .await
        .into_http()?;
    Ok(Json(UploadResponse { image_url }))
}
