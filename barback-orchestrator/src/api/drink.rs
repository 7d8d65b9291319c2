//! Drink API Handlers
//!
//! HTTP endpoints for the drink-recipe pipeline.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use barback_core::domain::record::RecipeRecord;
use barback_core::domain::request::DrinkRequest;
use barback_core::dto::intake::DrinkAccepted;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::{intake_service, recipe_service};

/// POST /drink
/// Accept a drink request and start its generation pipeline
///
/// Returns 202 immediately; the pipeline runs asynchronously.
pub async fn create_drink(
    State(state): State<AppState>,
    Json(req): Json<DrinkRequest>,
) -> ApiResult<(StatusCode, Json<DrinkAccepted>)> {
    tracing::info!("Drink recipe requested by: {}", req.customer_name);

    let accepted = intake_service::accept(&state.dispatcher, req).map_err(|e| match e {
        intake_service::IntakeError::ValidationError(msg) => ApiError::BadRequest(msg),
        intake_service::IntakeError::DispatchError(msg) => ApiError::InternalError(msg),
    })?;

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

/// GET /drink/{recipe_id}
/// Get the durable record for a recipe
pub async fn get_drink(
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
) -> ApiResult<Json<RecipeRecord>> {
    tracing::debug!("Getting recipe record: {}", recipe_id);

    let record = recipe_service::get_recipe(&state.store, recipe_id)
        .await
        .map_err(|e| match e {
            recipe_service::RecipeError::NotFound(id) => {
                ApiError::NotFound(format!("Recipe {} not found", id))
            }
            recipe_service::RecipeError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok(Json(record))
}
