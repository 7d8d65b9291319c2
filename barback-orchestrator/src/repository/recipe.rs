//! Recipe Repository
//!
//! Handles all database operations for the durable recipe record.

use async_trait::async_trait;
use barback_core::domain::record::{RecipeRecord, RecipeStatus};
use sqlx::PgPool;
use uuid::Uuid;

/// Durable store for recipe records, keyed by `recipe_id`
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Upserts the record; the persistence step writes `PROCESSING` here
    async fn upsert(&self, record: &RecipeRecord) -> Result<(), sqlx::Error>;

    /// Finds a record by recipe identifier
    async fn find_by_id(&self, recipe_id: Uuid) -> Result<Option<RecipeRecord>, sqlx::Error>;
}

/// Postgres-backed recipe store
#[derive(Debug, Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn upsert(&self, record: &RecipeRecord) -> Result<(), sqlx::Error> {
        let request = serde_json::to_value(&record.request)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        sqlx::query(
            r#"
            INSERT INTO recipes (recipe_id, created_at, request, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (recipe_id)
            DO UPDATE SET request = EXCLUDED.request, status = EXCLUDED.status
            "#,
        )
        .bind(record.recipe_id)
        .bind(record.timestamp)
        .bind(request)
        .bind(status_to_string(record.status))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, recipe_id: Uuid) -> Result<Option<RecipeRecord>, sqlx::Error> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT recipe_id, created_at, request, status
            FROM recipes
            WHERE recipe_id = $1
            "#,
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(RecipeRecord::try_from).transpose()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn status_to_string(status: RecipeStatus) -> &'static str {
    match status {
        RecipeStatus::Processing => "PROCESSING",
        RecipeStatus::Done => "DONE",
        RecipeStatus::Failed => "FAILED",
    }
}

fn string_to_status(s: &str) -> RecipeStatus {
    match s {
        "DONE" => RecipeStatus::Done,
        "FAILED" => RecipeStatus::Failed,
        _ => RecipeStatus::Processing,
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct RecipeRow {
    recipe_id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    request: serde_json::Value,
    status: String,
}

impl TryFrom<RecipeRow> for RecipeRecord {
    type Error = sqlx::Error;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let request =
            serde_json::from_value(row.request).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(RecipeRecord {
            recipe_id: row.recipe_id,
            timestamp: row.created_at,
            request,
            status: string_to_status(&row.status),
        })
    }
}
