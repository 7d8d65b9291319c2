//! Recipe Service
//!
//! Read access to the durable recipe record.

use barback_core::domain::record::RecipeRecord;
use std::sync::Arc;
use uuid::Uuid;

use crate::repository::RecipeStore;

/// Service error type
#[derive(Debug)]
pub enum RecipeError {
    NotFound(Uuid),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for RecipeError {
    fn from(err: sqlx::Error) -> Self {
        RecipeError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

/// Get a recipe record by ID
pub async fn get_recipe(store: &Arc<dyn RecipeStore>, recipe_id: Uuid) -> Result<RecipeRecord> {
    let record = store
        .find_by_id(recipe_id)
        .await?
        .ok_or(RecipeError::NotFound(recipe_id))?;

    Ok(record)
}
