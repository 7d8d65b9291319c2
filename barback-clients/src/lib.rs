//! Barback Clients
//!
//! Typed HTTP clients for the external collaborators of the drink-recipe
//! pipeline, each fronted by an async capability trait so pipeline steps can
//! be constructed with exactly the handles they need:
//!
//! - [`GenerationClient`]: text and image generation gateway
//!   ([`TextGenerator`] / [`ImageGenerator`])
//! - [`ArtifactStoreClient`]: bucket-style artifact storage ([`ArtifactStore`])
//! - [`MailerClient`]: email delivery API ([`Mailer`])
//! - [`FileSecretStore`]: mounted-file credential source ([`SecretStore`])
//!
//! # Example
//!
//! ```no_run
//! use barback_clients::{GenerationClient, GenerationParams, TextGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), barback_clients::ClientError> {
//!     let client = GenerationClient::new(
//!         "http://localhost:9090",
//!         "claude-3-sonnet",
//!         "stable-diffusion-xl",
//!         GenerationParams::default(),
//!     );
//!
//!     let text = client.generate_text("A fruity mocktail for a rainy day").await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod error;

mod artifacts;
mod generation;
mod mailer;
mod secrets;

pub use artifacts::{ArtifactStore, ArtifactStoreClient};
pub use error::{ClientError, Result};
pub use generation::{GenerationClient, GenerationParams, ImageGenerator, TextGenerator};
pub use mailer::{EmailAttachment, EmailMessage, Mailer, MailerClient};
pub use secrets::{FileSecretStore, MailerCredentials, SecretStore};

/// Fail a response whose status is outside the success range
///
/// Returns the response untouched on success so callers can keep consuming
/// the body; on failure the body text becomes the error message.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    Ok(response)
}
