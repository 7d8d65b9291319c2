//! Text generation step
//!
//! Builds the recipe prompt, invokes the text model, stores the output at the
//! recipe-id-derived key and appends it to the payload. Failures are fatal;
//! no fallback text is substituted.

use anyhow::Context;
use async_trait::async_trait;
use barback_clients::{ArtifactStore, TextGenerator};
use barback_core::domain::payload::{PipelinePayload, RecipeArtifacts, recipe_text_key};
use std::sync::Arc;
use tracing::info;

use crate::pipeline::prompt::recipe_prompt;
use crate::pipeline::{PipelineStep, RunState};

pub struct GenerateTextStep {
    generator: Arc<dyn TextGenerator>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl GenerateTextStep {
    pub fn new(generator: Arc<dyn TextGenerator>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            generator,
            artifacts,
        }
    }
}

#[async_trait]
impl PipelineStep for GenerateTextStep {
    fn state(&self) -> RunState {
        RunState::GeneratingText
    }

    async fn run(&self, mut payload: PipelinePayload) -> anyhow::Result<PipelinePayload> {
        info!("Generating recipe text for recipe {}", payload.recipe_id);

        let prompt = recipe_prompt(&payload.request);

        let text = self
            .generator
            .generate_text(&prompt)
            .await
            .context("Failed to generate recipe text")?;

        let text_key = recipe_text_key(payload.recipe_id);

        self.artifacts
            .put(&text_key, text.clone().into_bytes(), "text/plain")
            .await
            .context("Failed to store recipe text artifact")?;

        info!("Recipe text generated and stored at {}", text_key);

        payload.recipe = Some(RecipeArtifacts {
            text,
            text_key,
            image_key: None,
        });

        Ok(payload)
    }
}
