//! Notification step
//!
//! Fetches mailer credentials and the generated image, composes an HTML email
//! with the image attached and sends it to the request's contact address.
//!
//! Unlike the upstream steps, every failure here is caught and recorded in
//! the payload as a `FAILED` notification; the run still completes. Loss of
//! an email must stay distinguishable from loss of the recipe itself.

use anyhow::Context;
use async_trait::async_trait;
use barback_clients::{ArtifactStore, EmailAttachment, EmailMessage, Mailer, SecretStore};
use barback_core::domain::payload::{NotificationRecord, PipelinePayload};
use barback_core::domain::request::DrinkRequest;
use std::sync::Arc;
use tracing::{info, warn};

use crate::pipeline::{PipelineStep, RunState};

pub struct NotifyStep {
    secrets: Arc<dyn SecretStore>,
    artifacts: Arc<dyn ArtifactStore>,
    mailer: Arc<dyn Mailer>,
}

impl NotifyStep {
    pub fn new(
        secrets: Arc<dyn SecretStore>,
        artifacts: Arc<dyn ArtifactStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            secrets,
            artifacts,
            mailer,
        }
    }

    async fn try_notify(&self, payload: &PipelinePayload) -> anyhow::Result<NotificationRecord> {
        let recipient = payload
            .request
            .email
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Request has no contact email"))?;

        let recipe = payload
            .recipe
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Payload is missing generated recipe"))?;

        let image_key = recipe
            .image_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Payload is missing image locator"))?;

        let credentials = self
            .secrets
            .mailer_credentials()
            .await
            .context("Failed to fetch mailer credentials")?;

        let image = self
            .artifacts
            .get(image_key)
            .await
            .context("Failed to fetch image artifact")?;

        let name = drink_name(&payload.request);

        let message = EmailMessage {
            to: recipient.to_string(),
            subject: format!("Your Custom Drink Recipe: {}", name),
            html_body: email_html(&name, &recipe.text),
            attachment: Some(EmailAttachment {
                filename: format!("{}.jpg", name.replace(' ', "_")),
                content_type: "image/jpeg".to_string(),
                bytes: image,
            }),
        };

        let status_code = self
            .mailer
            .send(&credentials, &message)
            .await
            .context("Failed to send notification email")?;

        Ok(NotificationRecord::sent(recipient, status_code))
    }
}

#[async_trait]
impl PipelineStep for NotifyStep {
    fn state(&self) -> RunState {
        RunState::Notifying
    }

    async fn run(&self, mut payload: PipelinePayload) -> anyhow::Result<PipelinePayload> {
        info!("Sending email notification for recipe {}", payload.recipe_id);

        let notification = match self.try_notify(&payload).await {
            Ok(record) => {
                info!(
                    "Email notification sent for recipe {} (status {})",
                    payload.recipe_id,
                    record.status_code.unwrap_or_default()
                );
                record
            }
            Err(error) => {
                warn!(
                    "Notification failed for recipe {}: {:#}",
                    payload.recipe_id, error
                );
                NotificationRecord::failed(format!("{error:#}"))
            }
        };

        payload.notification = Some(notification);

        Ok(payload)
    }
}

/// Display name used in the email subject and attachment filename
fn drink_name(request: &DrinkRequest) -> String {
    format!("{}'s {} drink", request.customer_name, request.flavor)
}

fn email_html(drink_name: &str, recipe_text: &str) -> String {
    let formatted_recipe = recipe_text.replace('\n', "<br>");

    format!(
        r#"<html>
    <head>
        <style>
            body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
            .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
            h1 {{ color: #8B4513; }}
            .recipe {{ background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}
            .footer {{ margin-top: 30px; font-size: 12px; color: #777; }}
        </style>
    </head>
    <body>
        <div class="container">
            <h1>Your Custom Drink Recipe: {drink_name}</h1>
            <p>Thank you for using Barback! Here's your custom recipe:</p>
            <div class="recipe">
                {formatted_recipe}
            </div>
            <p>We've attached an image of what your drink might look like. Enjoy!</p>
            <div class="footer">
                <p>This recipe was generated by AI and may need adjustments to suit your taste.</p>
                <p>© Barback</p>
            </div>
        </div>
    </body>
</html>"#
    )
}
