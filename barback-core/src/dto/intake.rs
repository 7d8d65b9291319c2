//! Intake API DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body for an accepted drink request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkAccepted {
    pub message: String,
    pub recipe_id: Uuid,
}

impl DrinkAccepted {
    pub fn new(recipe_id: Uuid) -> Self {
        Self {
            message: "Drink recipe generation started".to_string(),
            recipe_id,
        }
    }
}

/// Response body for the greeting endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}
