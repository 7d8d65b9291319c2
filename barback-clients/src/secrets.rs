//! Secret store
//!
//! Mailer credentials are fetched at notification time rather than held in
//! process configuration, so only the notification step ever touches them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ClientError, Result};

/// Credentials for the mail-delivery API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerCredentials {
    pub sender_email: String,
    pub api_key: String,
}

/// Capability handle for fetching mailer credentials
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn mailer_credentials(&self) -> Result<MailerCredentials>;
}

/// Secret store backed by a mounted JSON file
///
/// Expects a file of the form `{"sender_email": "...", "api_key": "..."}`.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SecretStore for FileSecretStore {
    async fn mailer_credentials(&self) -> Result<MailerCredentials> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ClientError::SecretUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        parse_credentials(&contents)
    }
}

fn parse_credentials(contents: &str) -> Result<MailerCredentials> {
    serde_json::from_str(contents)
        .map_err(|e| ClientError::ParseError(format!("Invalid mailer secret: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credentials() {
        let creds =
            parse_credentials(r#"{"sender_email":"bar@example.com","api_key":"SG.test"}"#).unwrap();
        assert_eq!(creds.sender_email, "bar@example.com");
        assert_eq!(creds.api_key, "SG.test");
    }

    #[test]
    fn test_parse_credentials_missing_field() {
        assert!(matches!(
            parse_credentials(r#"{"sender_email":"bar@example.com"}"#),
            Err(ClientError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_file_secret_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mailer.json");
        std::fs::write(
            &path,
            r#"{"sender_email":"bar@example.com","api_key":"SG.test"}"#,
        )
        .unwrap();

        let store = FileSecretStore::new(&path);
        let creds = store.mailer_credentials().await.unwrap();
        assert_eq!(creds.sender_email, "bar@example.com");
    }

    #[tokio::test]
    async fn test_file_secret_store_missing_file() {
        let store = FileSecretStore::new("/nonexistent/mailer.json");
        assert!(matches!(
            store.mailer_credentials().await,
            Err(ClientError::SecretUnavailable(_))
        ));
    }
}
