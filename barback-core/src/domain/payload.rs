//! Pipeline payload domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::request::DrinkRequest;

/// Mutable envelope threaded through all pipeline steps
///
/// Fields are append-only: each step may only add to `recipe`/`notification`,
/// never remove or rewrite what an earlier step wrote. The payload is the sole
/// channel of state between steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelinePayload {
    pub recipe_id: Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub request: DrinkRequest,
    #[serde(default)]
    pub recipe: Option<RecipeArtifacts>,
    #[serde(default)]
    pub notification: Option<NotificationRecord>,
}

impl PipelinePayload {
    /// Creates the initial payload as dispatched by the intake endpoint
    pub fn new(
        recipe_id: Uuid,
        timestamp: chrono::DateTime<chrono::Utc>,
        request: DrinkRequest,
    ) -> Self {
        Self {
            recipe_id,
            timestamp,
            request,
            recipe: None,
            notification: None,
        }
    }
}

/// Generated recipe content accumulated across the generation steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeArtifacts {
    pub text: String,
    pub text_key: String,
    #[serde(default)]
    pub image_key: Option<String>,
}

/// Result of the notification step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub status: NotificationStatus,
    #[serde(default)]
    pub sent_to: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
}

impl NotificationRecord {
    pub fn sent(recipient: impl Into<String>, status_code: u16) -> Self {
        Self {
            status: NotificationStatus::Sent,
            sent_to: Some(recipient.into()),
            status_code: Some(status_code),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Failed,
            sent_to: None,
            status_code: None,
            error: Some(error.into()),
        }
    }
}

/// Delivery status of the notification step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationStatus {
    #[serde(rename = "SENT")]
    Sent,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Artifact-store key for the generated recipe text
///
/// Derivable purely from the recipe identifier so the notification step can
/// locate the artifact without extra state.
pub fn recipe_text_key(recipe_id: Uuid) -> String {
    format!("recipes/{}/recipe.txt", recipe_id)
}

/// Artifact-store key for the generated recipe image
pub fn recipe_image_key(recipe_id: Uuid) -> String {
    format!("recipes/{}/image.jpg", recipe_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{Flavor, Mood};

    fn request() -> DrinkRequest {
        DrinkRequest {
            customer_name: "Ana".to_string(),
            mood: Mood::Happy,
            flavor: Flavor::Fruity,
            fruit: vec!["mango".to_string()],
            liquids: vec!["soda".to_string()],
            syrups: vec![],
            leaves: vec![],
            notes: None,
            email: None,
        }
    }

    #[test]
    fn test_artifact_keys_derive_from_recipe_id() {
        let id = Uuid::new_v4();
        assert_eq!(recipe_text_key(id), format!("recipes/{}/recipe.txt", id));
        assert_eq!(recipe_image_key(id), format!("recipes/{}/image.jpg", id));
    }

    #[test]
    fn test_initial_payload_has_no_accumulated_state() {
        let payload = PipelinePayload::new(Uuid::new_v4(), chrono::Utc::now(), request());
        assert!(payload.recipe.is_none());
        assert!(payload.notification.is_none());
    }

    #[test]
    fn test_notification_record_constructors() {
        let sent = NotificationRecord::sent("ana@example.com", 202);
        assert_eq!(sent.status, NotificationStatus::Sent);
        assert_eq!(sent.sent_to.as_deref(), Some("ana@example.com"));
        assert_eq!(sent.status_code, Some(202));
        assert!(sent.error.is_none());

        let failed = NotificationRecord::failed("delivery refused");
        assert_eq!(failed.status, NotificationStatus::Failed);
        assert_eq!(failed.error.as_deref(), Some("delivery refused"));
        assert!(failed.sent_to.is_none());
    }

    #[test]
    fn test_notification_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&NotificationStatus::Sent).unwrap(),
            "\"SENT\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationStatus::Failed).unwrap(),
            "\"FAILED\""
        );
    }

    #[test]
    fn test_payload_round_trip() {
        let mut payload = PipelinePayload::new(Uuid::new_v4(), chrono::Utc::now(), request());
        payload.recipe = Some(RecipeArtifacts {
            text: "Shake well.".to_string(),
            text_key: recipe_text_key(payload.recipe_id),
            image_key: Some(recipe_image_key(payload.recipe_id)),
        });

        let json = serde_json::to_string(&payload).unwrap();
        let parsed: PipelinePayload = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.recipe_id, payload.recipe_id);
        assert_eq!(parsed.request, payload.request);
        assert_eq!(parsed.recipe.unwrap().text, "Shake well.");
    }
}
