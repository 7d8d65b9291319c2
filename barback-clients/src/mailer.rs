//! Mail delivery client
//!
//! SendGrid-shaped delivery API: one personalization per message, HTML body,
//! optional base64 attachment. Credentials are supplied per send so the
//! client itself never holds secret material.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Serialize;

use crate::check_status;
use crate::error::Result;
use crate::secrets::MailerCredentials;

/// An email to be delivered
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub attachment: Option<EmailAttachment>,
}

/// Binary attachment for an email
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Capability handle for sending email
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a message, returning the delivery API's status code
    async fn send(&self, credentials: &MailerCredentials, message: &EmailMessage) -> Result<u16>;
}

/// HTTP client for the mail-delivery API
#[derive(Debug, Clone)]
pub struct MailerClient {
    base_url: String,
    client: Client,
}

impl MailerClient {
    /// Create a new mailer client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the delivery API (e.g. "https://api.sendgrid.com")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the delivery API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Mailer for MailerClient {
    async fn send(&self, credentials: &MailerCredentials, message: &EmailMessage) -> Result<u16> {
        let url = format!("{}/v3/mail/send", self.base_url);
        tracing::debug!("Sending email to {}", message.to);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&credentials.api_key)
            .json(&send_request(&credentials.sender_email, message))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.status().as_u16())
    }
}

fn send_request(sender_email: &str, message: &EmailMessage) -> SendRequest {
    SendRequest {
        personalizations: vec![Personalization {
            to: vec![Address {
                email: message.to.clone(),
            }],
        }],
        from: Address {
            email: sender_email.to_string(),
        },
        subject: message.subject.clone(),
        content: vec![Content {
            content_type: "text/html".to_string(),
            value: message.html_body.clone(),
        }],
        attachments: message.attachment.as_ref().map(|attachment| {
            vec![Attachment {
                content: BASE64.encode(&attachment.bytes),
                content_type: attachment.content_type.clone(),
                filename: attachment.filename.clone(),
                disposition: "attachment".to_string(),
            }]
        }),
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct SendRequest {
    personalizations: Vec<Personalization>,
    from: Address,
    subject: String,
    content: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    to: Vec<Address>,
}

#[derive(Debug, Serialize)]
struct Address {
    email: String,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct Attachment {
    content: String,
    #[serde(rename = "type")]
    content_type: String,
    filename: String,
    disposition: String,
}
