use aws_config::Region;
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Credentials, SharedCredentialsProvider};
use aws_sdk_s3::Client as S3Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub endpoint: String, // Internal endpoint for service-to-service communication
    #[serde(default)]
    pub external_endpoint: Option<String>, // Browser-accessible endpoint for public URLs
    pub access_key: SecretString,
    pub secret_key: SecretString,
    pub bucket_name: String,
    pub region: String,
}

impl StorageSettings {
    /// The endpoint embedded in URLs handed back to browsers.
    pub fn public_endpoint(&self) -> &str {
        self.external_endpoint.as_ref().unwrap_or(&self.endpoint)
    }

    pub fn create_s3_client(&self) -> S3Client {
        let creds = Credentials::new(
            self.access_key.expose_secret(),
            self.secret_key.expose_secret(),
            None,
            None,
            "campus-cup-storage",
        );

        let config = S3ConfigBuilder::new()
            .endpoint_url(&self.endpoint)
            .credentials_provider(SharedCredentialsProvider::new(creds))
            .region(Region::new(self.region.clone()))
            .force_path_style(true) // Required for MinIO
            .behavior_version_latest()
            .build();

        S3Client::from_conf(config)
    }
}
