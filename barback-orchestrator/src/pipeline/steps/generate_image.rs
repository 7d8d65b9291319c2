//! Image generation step
//!
//! Builds the image prompt from the request and the generated text, invokes
//! the image model, stores the decoded image and appends its locator to the
//! payload without touching anything written upstream. Failures are fatal.

use anyhow::Context;
use async_trait::async_trait;
use barback_clients::{ArtifactStore, ImageGenerator};
use barback_core::domain::payload::{PipelinePayload, recipe_image_key};
use std::sync::Arc;
use tracing::info;

use crate::pipeline::prompt::image_prompt;
use crate::pipeline::{PipelineStep, RunState};

pub struct GenerateImageStep {
    generator: Arc<dyn ImageGenerator>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl GenerateImageStep {
    pub fn new(generator: Arc<dyn ImageGenerator>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            generator,
            artifacts,
        }
    }
}

#[async_trait]
impl PipelineStep for GenerateImageStep {
    fn state(&self) -> RunState {
        RunState::GeneratingImage
    }

    async fn run(&self, mut payload: PipelinePayload) -> anyhow::Result<PipelinePayload> {
        info!("Generating recipe image for recipe {}", payload.recipe_id);

        let prompt = {
            let recipe = payload
                .recipe
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("Payload is missing generated recipe text"))?;
            image_prompt(&payload.request, &recipe.text)
        };

        let image = self
            .generator
            .generate_image(&prompt)
            .await
            .context("Failed to generate recipe image")?;

        let image_key = recipe_image_key(payload.recipe_id);

        self.artifacts
            .put(&image_key, image, "image/jpeg")
            .await
            .context("Failed to store recipe image artifact")?;

        info!("Recipe image generated and stored at {}", image_key);

        if let Some(recipe) = payload.recipe.as_mut() {
            recipe.image_key = Some(image_key);
        }

        Ok(payload)
    }
}
