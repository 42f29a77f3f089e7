use std::{io::ErrorKind, path::PathBuf};

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{StorageConfig, entities::app_errors::CoreError},
    storage::{ports::ImageStoragePort, value_objects::ImageFileName},
};

/// Keeps uploaded images as plain files in one directory.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    upload_dir: PathBuf,
}

impl LocalImageStorage {
    /// Creates the upload directory if it does not exist yet.
    pub async fn new(config: StorageConfig) -> Result<Self, CoreError> {
        tokio::fs::create_dir_all(&config.upload_dir)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create upload directory {}: {}",
                    config.upload_dir.display(),
                    e
                );
                CoreError::StorageError(format!("Failed to create upload directory: {}", e))
            })?;

        tracing::info!(upload_dir = %config.upload_dir.display(), "Initializing image storage");

        Ok(Self {
            upload_dir: config.upload_dir,
        })
    }
}

impl ImageStoragePort for LocalImageStorage {
    #[instrument(skip(self, payload), fields(size = payload.len()))]
    async fn save_image(
        &self,
        file_name: ImageFileName,
        payload: Bytes,
    ) -> Result<String, CoreError> {
        let path = self.upload_dir.join(file_name.as_str());

        tokio::fs::write(&path, &payload).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to save image");
            CoreError::StorageError(format!("Failed to save image: {}", e))
        })?;

        Ok(file_name.to_string())
    }

    #[instrument(skip(self))]
    async fn read_image(&self, file_name: ImageFileName) -> Result<Bytes, CoreError> {
        let path = self.upload_dir.join(file_name.as_str());

        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CoreError::NotFound),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read image");
                Err(CoreError::StorageError(format!("Failed to read image: {}", e)))
            }
        }
    }
}
