//! Greeting API Handler
//!
//! Simple demo endpoint, unrelated to the recipe pipeline.

use axum::{Json, extract::Query};
use barback_core::dto::intake::Greeting;
use serde::Deserialize;

use crate::api::error::{ApiError, ApiResult};
use crate::service::greeting_service;

#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    name: String,
}

/// GET /?name=...
/// Greet the caller by name
pub async fn get_greeting(Query(params): Query<GreetingParams>) -> ApiResult<Json<Greeting>> {
    tracing::debug!("Greeting request for name: {}", params.name);

    let greeting = greeting_service::greet(&params.name).map_err(|e| match e {
        greeting_service::GreetingError::InvalidName(msg) => ApiError::BadRequest(msg),
    })?;

    Ok(Json(greeting))
}
