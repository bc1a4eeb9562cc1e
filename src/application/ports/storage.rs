use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl MediaUpload {
    /// Stored extension for the declared content type, if that type is accepted.
    pub fn extension(&self) -> Option<&'static str> {
        extension_for_content_type(self.content_type.as_deref()?)
    }
}

/// Accepted media types. The stored file's extension always comes from here, never from
/// the client's file name.
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let ext = match essence.as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/avif" => "avif",
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "video/quicktime" => "mov",
        _ => return None,
    };
    Some(ext)
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persists the upload and returns the public URL it is served from.
    async fn store(&self, upload: MediaUpload) -> ApplicationResult<String>;
}
