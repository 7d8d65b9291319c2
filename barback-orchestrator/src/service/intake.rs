//! Intake Service
//!
//! Validates inbound drink requests, allocates a recipe identifier and
//! dispatches a pipeline run. Performs no side effects when validation fails
//! and never waits for the pipeline itself.

use barback_core::domain::payload::PipelinePayload;
use barback_core::domain::request::DrinkRequest;
use barback_core::dto::intake::DrinkAccepted;
use uuid::Uuid;

use crate::pipeline::Dispatcher;

/// Service error type
#[derive(Debug)]
pub enum IntakeError {
    ValidationError(String),
    DispatchError(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;

/// Accepts a drink request and starts its pipeline run
///
/// Allocates a fresh `recipe_id` and timestamp, enqueues the initial payload
/// and returns immediately; the caller never observes pipeline latency.
pub fn accept(dispatcher: &Dispatcher, request: DrinkRequest) -> Result<DrinkAccepted> {
    request
        .validate()
        .map_err(|e| IntakeError::ValidationError(e.to_string()))?;

    let recipe_id = Uuid::new_v4();
    let payload = PipelinePayload::new(recipe_id, chrono::Utc::now(), request);

    dispatcher
        .dispatch(payload)
        .map_err(|e| IntakeError::DispatchError(e.to_string()))?;

    tracing::info!("Pipeline run dispatched for recipe {}", recipe_id);

    Ok(DrinkAccepted::new(recipe_id))
}
