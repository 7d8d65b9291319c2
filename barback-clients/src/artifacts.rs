//! Artifact store client
//!
//! Bucket-style HTTP object storage for generated recipe artifacts. Objects
//! are written once by their generation step and read once by the
//! notification step; keys are namespaced by recipe identifier.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::check_status;
use crate::error::Result;

/// Capability handle for reading and writing recipe artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores an object under the given key
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Fetches an object by key
    async fn get(&self, key: &str) -> Result<Vec<u8>>;
}

/// HTTP client for a bucket-style artifact store
#[derive(Debug, Clone)]
pub struct ArtifactStoreClient {
    base_url: String,
    bucket: String,
    client: Client,
}

impl ArtifactStoreClient {
    /// Create a new artifact store client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the object store
    /// * `bucket` - Bucket holding recipe artifacts
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the store
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.bucket, key)
    }
}

#[async_trait]
impl ArtifactStore for ArtifactStoreClient {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        let url = self.object_url(key);
        tracing::debug!("Storing artifact at {}", key);

        let response = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(key);
        tracing::debug!("Fetching artifact from {}", key);

        let response = self.client.get(&url).send().await?;
        let bytes = check_status(response).await?.bytes().await?;

        Ok(bytes.to_vec())
    }
}
