// src/infrastructure/storage.rs
use crate::application::{
    ApplicationError, ApplicationResult,
    ports::storage::{MediaStorage, MediaUpload},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes uploads to a local directory served under `/uploads`.
#[derive(Clone, Debug)]
pub struct LocalMediaStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, upload: MediaUpload) -> ApplicationResult<String> {
        let ext = upload.extension().ok_or_else(|| {
            ApplicationError::validation("unsupported or missing media content type")
        })?;
        let file_name = format!("{}.{ext}", Uuid::new_v4().simple());

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tokio::fs::write(self.root.join(&file_name), &upload.data)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        tracing::info!(file = %file_name, bytes = upload.data.len(), "stored upload");
        Ok(format!("{}/uploads/{file_name}", self.public_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(name: Option<&str>, content_type: Option<&str>) -> MediaUpload {
        MediaUpload {
            file_name: name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            data: Bytes::from_static(b"\x89PNG"),
        }
    }

    #[tokio::test]
    async fn extension_follows_content_type_not_file_name() {
        let dir = std::env::temp_dir().join(format!("eijafilm-upload-{}", Uuid::new_v4()));
        let storage = LocalMediaStorage::new(&dir, "http://localhost:8080");

        let url = storage
            .store(upload(Some("evil.html"), Some("image/png")))
            .await
            .unwrap();
        assert!(url.ends_with(".png"), "{url}");

        let err = storage.store(upload(Some("evil.html"), None)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
        let err = storage
            .store(upload(Some("page.html"), Some("text/html")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn store_writes_file_and_returns_public_url() {
        let dir = std::env::temp_dir().join(format!("eijafilm-upload-{}", Uuid::new_v4()));
        let storage = LocalMediaStorage::new(&dir, "http://localhost:8080/");

        let url = storage
            .store(upload(Some("cover.png"), Some("image/png")))
            .await
            .unwrap();

        assert!(url.starts_with("http://localhost:8080/uploads/"));
        assert!(url.ends_with(".png"));
        let name = url.rsplit('/').next().unwrap();
        let written = tokio::fs::read(dir.join(name)).await.unwrap();
        assert_eq!(written, b"\x89PNG");
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
