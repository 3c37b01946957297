use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use bytes::Bytes;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::storage::StorageSettings;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to reach object storage: {0}")]
    Unavailable(String),
    #[error("failed to store object {key}: {message}")]
    UploadFailed { key: String, message: String },
}

#[derive(Clone, Debug)]
pub struct StorageService {
    client: Arc<S3Client>,
    bucket_name: String,
    public_endpoint: String,
}

impl StorageService {
    pub async fn new(settings: StorageSettings) -> Result<Self, StorageError> {
        let service = Self {
            client: Arc::new(settings.create_s3_client()),
            bucket_name: settings.bucket_name.clone(),
            public_endpoint: settings.public_endpoint().trim_end_matches('/').to_string(),
        };

        service.init_bucket().await?;

        Ok(service)
    }

    async fn init_bucket(&self) -> Result<(), StorageError> {
        info!("Initializing storage bucket: {}", self.bucket_name);

        let bucket_exists = self
            .client
            .head_bucket()
            .bucket(&self.bucket_name)
            .send()
            .await
            .is_ok();

        if !bucket_exists {
            info!("Creating storage bucket: {}", self.bucket_name);
            self.client
                .create_bucket()
                .bucket(&self.bucket_name)
                .send()
                .await
                .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        }

        Ok(())
    }

    /// Upload a news attachment and return its public URL. Objects are keyed
    /// by upload timestamp plus a random suffix so concurrent uploads never
    /// collide.
    pub async fn upload_news_media(
        &self,
        file_data: Bytes,
        extension: &str,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        let object_key = format!(
            "news/{}_{}.{}",
            Utc::now().timestamp_millis(),
            suffix,
            extension
        );

        info!(
            "Uploading news media: {} (size: {} bytes)",
            object_key,
            file_data.len()
        );

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&object_key)
            .body(ByteStream::from(file_data))
            .content_type(content_type)
            .metadata("uploaded_at", Utc::now().to_rfc3339())
            .send()
            .await
            .map_err(|e| {
                error!("Failed to upload news media {}: {}", object_key, e);
                StorageError::UploadFailed {
                    key: object_key.clone(),
                    message: e.to_string(),
                }
            })?;

        Ok(self.public_url(&object_key))
    }

    /// Path-style URL served by the storage endpoint.
    pub fn public_url(&self, object_key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket_name, object_key)
    }
}
