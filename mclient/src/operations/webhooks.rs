use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::{Value, json};

use crate::{MemoryClient, WebhookUpdate};

impl MemoryClient {
    pub async fn create_webhook(
        &self,
        url: &str,
        events: Vec<String>,
        secret: Option<&str>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("create_webhook", "webhooks").with_json(json!({
            "url": url,
            "events": events,
            "secret": secret,
        })))
        .await
    }

    pub async fn list_webhooks(&self, user_id: Option<&str>) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get("list_webhooks", "webhooks")
                .with_optional_query("user_id", user_id.filter(|value| !value.is_empty())),
        )
        .await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_webhook", format!("webhooks/{webhook_id}")))
            .await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        update: WebhookUpdate,
    ) -> Result<JsonObject, ApiError> {
        let mut body = JsonObject::new();
        if let Some(url) = update.url {
            body.insert("url".to_string(), json!(url));
        }
        if let Some(events) = update.events {
            body.insert("events".to_string(), json!(events));
        }
        if let Some(secret) = update.secret {
            body.insert("secret".to_string(), json!(secret));
        }
        if let Some(active) = update.active {
            body.insert("active".to_string(), json!(active));
        }

        self.send_object(
            ApiRequest::put("update_webhook", format!("webhooks/{webhook_id}"))
                .with_json(Value::Object(body)),
        )
        .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::delete(
            "delete_webhook",
            format!("webhooks/{webhook_id}"),
        ))
        .await
    }

    pub async fn test_webhook(&self, webhook_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post(
            "test_webhook",
            format!("webhooks/{webhook_id}/test"),
        ))
        .await
    }
}
