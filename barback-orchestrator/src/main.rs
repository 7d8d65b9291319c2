//! Barback Orchestrator
//!
//! HTTP service that accepts drink-recipe requests and runs the asynchronous
//! four-step generation pipeline (persist, generate text, generate image,
//! notify) for each accepted request.
//!
//! Architecture:
//! - API: axum router (intake, greeting, record lookup, health)
//! - Repository: Postgres-backed recipe store
//! - Pipeline: fixed step chain executed per run under a wall-clock timeout
//! - Clients: capability handles for the external collaborators, constructed
//!   once here and injected into the steps that need them

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use barback_clients::{
    ArtifactStoreClient, FileSecretStore, GenerationClient, GenerationParams, MailerClient,
};

pub mod api;
pub mod config;
pub mod db;
pub mod pipeline;
pub mod repository;
pub mod service;

use crate::api::AppState;
use crate::config::Config;
use crate::pipeline::{PipelineRunner, spawn_dispatcher};
use crate::repository::{PgRecipeStore, RecipeStore};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "barback_orchestrator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Barback Orchestrator...");

    let config = Config::from_env();
    config.validate().expect("Invalid configuration");

    tracing::info!("Connecting to database...");

    // Create database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database connection pool created");

    // Run migrations
    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Construct capability handles once per process; each pipeline step
    // receives only the ones it needs
    let store: Arc<dyn RecipeStore> = Arc::new(PgRecipeStore::new(pool));

    let generation = Arc::new(GenerationClient::new(
        &config.generation_url,
        &config.text_model_id,
        &config.image_model_id,
        GenerationParams::default(),
    ));

    let artifacts = Arc::new(ArtifactStoreClient::new(
        &config.artifact_store_url,
        &config.recipes_bucket,
    ));

    let secrets = Arc::new(FileSecretStore::new(&config.mailer_secret_path));

    let mailer = Arc::new(MailerClient::new(&config.mail_api_url));

    let runner = Arc::new(PipelineRunner::new(
        store.clone(),
        generation.clone(),
        generation,
        artifacts,
        secrets,
        mailer,
        config.pipeline_timeout,
    ));

    let (dispatcher, _worker) = spawn_dispatcher(runner, config.dispatch_queue_size);

    tracing::info!("Pipeline worker started");

    // Build router with all API endpoints
    let app = api::create_router(AppState { store, dispatcher });

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
