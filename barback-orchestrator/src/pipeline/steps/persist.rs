//! Persistence step
//!
//! Writes the initial recipe record with status `PROCESSING` and passes the
//! payload through verbatim. Failures are fatal.

use anyhow::Context;
use async_trait::async_trait;
use barback_core::domain::payload::PipelinePayload;
use barback_core::domain::record::{RecipeRecord, RecipeStatus};
use std::sync::Arc;
use tracing::info;

use crate::pipeline::{PipelineStep, RunState};
use crate::repository::RecipeStore;

pub struct PersistStep {
    store: Arc<dyn RecipeStore>,
}

impl PersistStep {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PipelineStep for PersistStep {
    fn state(&self) -> RunState {
        RunState::Persisting
    }

    async fn run(&self, payload: PipelinePayload) -> anyhow::Result<PipelinePayload> {
        info!("Persisting initial request for recipe {}", payload.recipe_id);

        let record = RecipeRecord {
            recipe_id: payload.recipe_id,
            timestamp: payload.timestamp,
            request: payload.request.clone(),
            status: RecipeStatus::Processing,
        };

        self.store
            .upsert(&record)
            .await
            .context("Failed to persist initial recipe record")?;

        info!("Request persisted successfully for recipe {}", payload.recipe_id);

        Ok(payload)
    }
}
