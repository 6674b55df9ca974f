use mclient::WebhookUpdate;
use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn create_webhook(
        &self,
        url: &str,
        events: Vec<String>,
        secret: Option<&str>,
    ) -> JsonObject {
        best_effort(
            "create_webhook",
            self.client().create_webhook(url, events, secret),
        )
        .await
    }

    /// Lists webhooks for `user_id`, or for the configured user when `None`.
    pub async fn list_webhooks(&self, user_id: Option<&str>) -> Vec<Value> {
        let user_id = user_id.unwrap_or(self.user());
        best_effort("list_webhooks", self.client().list_webhooks(Some(user_id))).await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> JsonObject {
        best_effort("get_webhook", self.client().get_webhook(webhook_id)).await
    }

    pub async fn update_webhook(&self, webhook_id: &str, update: WebhookUpdate) -> JsonObject {
        best_effort(
            "update_webhook",
            self.client().update_webhook(webhook_id, update),
        )
        .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> JsonObject {
        best_effort("delete_webhook", self.client().delete_webhook(webhook_id)).await
    }

    pub async fn test_webhook(&self, webhook_id: &str) -> JsonObject {
        best_effort("test_webhook", self.client().test_webhook(webhook_id)).await
    }
}
