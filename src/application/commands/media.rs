use std::sync::Arc;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::storage::{MediaStorage, MediaUpload},
};

pub struct MediaCommandService {
    storage: Arc<dyn MediaStorage>,
}

impl MediaCommandService {
    pub fn new(storage: Arc<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    /// Stores an uploaded image or video and returns its public URL.
    pub async fn upload(
        &self,
        actor: &AuthenticatedUser,
        upload: Option<MediaUpload>,
    ) -> ApplicationResult<String> {
        let upload = upload
            .filter(|upload| !upload.data.is_empty())
            .ok_or_else(|| ApplicationError::validation("no file uploaded"))?;

        let Some(content_type) = upload.content_type.as_deref() else {
            return Err(ApplicationError::validation("the file part needs a content type"));
        };
        if upload.extension().is_none() {
            return Err(ApplicationError::validation(format!(
                "unsupported media type '{content_type}'"
            )));
        }

        let size = upload.data.len();
        let url = self.storage.store(upload).await?;
        tracing::info!(user_id = %actor.id, size, url = %url, "media uploaded");
        Ok(url)
    }
}
