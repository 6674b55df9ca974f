use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::Value;

use crate::MemoryClient;
use crate::shape::unwrap_logs;

impl MemoryClient {
    pub async fn health_check(&self) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("health_check", "health")).await
    }

    pub async fn get_metrics(&self) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_metrics", "metrics")).await
    }

    pub async fn get_metrics_summary(&self) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_metrics_summary", "metrics/summary"))
            .await
    }

    pub async fn get_audit_logs(
        &self,
        user_id: Option<&str>,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        let value = self
            .send_raw(
                ApiRequest::get("get_audit_logs", "audit-logs")
                    .with_query("limit", limit)
                    .with_optional_query("user_id", user_id.filter(|value| !value.is_empty())),
            )
            .await?;
        Ok(unwrap_logs(value))
    }

    pub async fn get_user_analytics(&self, user_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get(
            "get_user_analytics",
            format!("analytics/user-stats/{user_id}"),
        ))
        .await
    }

    pub async fn get_memory_growth(&self, user_id: &str, days: u64) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::get("get_memory_growth", "analytics/memory-growth")
                .with_query("days", days)
                .with_query("user_id", user_id),
        )
        .await
    }
}
