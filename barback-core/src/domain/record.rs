//! Durable recipe record types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::request::DrinkRequest;

/// Durable record of a recipe request
///
/// Created by the persistence step with status `PROCESSING`; never deleted by
/// the pipeline. Terminal status updates are a deliberate extension point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub recipe_id: Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub request: DrinkRequest,
    pub status: RecipeStatus,
}

/// Lifecycle status of a recipe record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipeStatus {
    Processing,
    Done,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&RecipeStatus::Processing).unwrap(),
            "\"PROCESSING\""
        );
        assert_eq!(
            serde_json::from_str::<RecipeStatus>("\"FAILED\"").unwrap(),
            RecipeStatus::Failed
        );
    }
}
