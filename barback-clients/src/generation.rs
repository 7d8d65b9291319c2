//! Generation gateway client
//!
//! One gateway serves both generative models; the text and image invocations
//! differ only in model identifier and body shape. Generation parameters are
//! static configuration, not business logic.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::check_status;
use crate::error::{ClientError, Result};

/// Capability handle for generating recipe text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text from a prompt, returning the model output verbatim
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Capability handle for generating recipe images
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates an image from a prompt, returning decoded JPEG bytes
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}

/// Fixed generation parameters
///
/// Injected once at construction; pipeline steps never vary them per request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub cfg_scale: u32,
    pub steps: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            cfg_scale: 7,
            steps: 50,
            width: 1024,
            height: 1024,
        }
    }
}

/// HTTP client for the generation gateway
#[derive(Debug, Clone)]
pub struct GenerationClient {
    base_url: String,
    client: Client,
    text_model: String,
    image_model: String,
    params: GenerationParams,
}

impl GenerationClient {
    /// Create a new generation client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the generation gateway
    /// * `text_model` - Model identifier for text invocations
    /// * `image_model` - Model identifier for image invocations
    /// * `params` - Fixed generation parameters
    pub fn new(
        base_url: impl Into<String>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
        params: GenerationParams,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            text_model: text_model.into(),
            image_model: image_model.into(),
            params,
        }
    }

    /// Get the base URL of the gateway
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn invoke_url(&self, model: &str) -> String {
        format!("{}/model/{}/invoke", self.base_url, model)
    }

    fn text_request(&self, prompt: &str) -> TextInvocation {
        TextInvocation {
            max_tokens: self.params.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }

    fn image_request(&self, prompt: &str) -> ImageInvocation {
        ImageInvocation {
            text_prompts: vec![TextPrompt {
                text: prompt.to_string(),
                weight: 1.0,
            }],
            cfg_scale: self.params.cfg_scale,
            steps: self.params.steps,
            seed: 0,
            width: self.params.width,
            height: self.params.height,
        }
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = self.invoke_url(&self.text_model);
        tracing::debug!("Invoking text model {}", self.text_model);

        let response = self
            .client
            .post(&url)
            .json(&self.text_request(prompt))
            .send()
            .await?;

        let body: TextInvocationResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        extract_text(body)
    }
}

#[async_trait]
impl ImageGenerator for GenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let url = self.invoke_url(&self.image_model);
        tracing::debug!("Invoking image model {}", self.image_model);

        let response = self
            .client
            .post(&url)
            .json(&self.image_request(prompt))
            .send()
            .await?;

        let body: ImageInvocationResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        decode_image(body)
    }
}

fn extract_text(body: TextInvocationResponse) -> Result<String> {
    body.content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| ClientError::ParseError("Response contained no content blocks".to_string()))
}

fn decode_image(body: ImageInvocationResponse) -> Result<Vec<u8>> {
    let artifact = body
        .artifacts
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::ParseError("Response contained no artifacts".to_string()))?;

    BASE64
        .decode(artifact.base64.as_bytes())
        .map_err(|e| ClientError::DecodeError(format!("Invalid base64 image data: {}", e)))
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct TextInvocation {
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct TextInvocationResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Debug, Serialize)]
struct ImageInvocation {
    text_prompts: Vec<TextPrompt>,
    cfg_scale: u32,
    steps: u32,
    seed: u32,
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct TextPrompt {
    text: String,
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct ImageInvocationResponse {
    artifacts: Vec<ImageArtifact>,
}

#[derive(Debug, Deserialize)]
struct ImageArtifact {
    base64: String,
}
