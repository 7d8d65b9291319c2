//! API Module
//!
//! HTTP API layer for the orchestrator.
//! Each submodule handles endpoints for a specific domain.

pub mod drink;
pub mod error;
pub mod greeting;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::pipeline::Dispatcher;
use crate::repository::RecipeStore;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub dispatcher: Dispatcher,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Greeting endpoint
        .route("/", get(greeting::get_greeting))
        // Drink endpoints
        .route("/drink", post(drink::create_drink))
        .route("/drink/{recipe_id}", get(drink::get_drink))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
