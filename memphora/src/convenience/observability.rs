use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn health(&self) -> JsonObject {
        best_effort("health", self.client().health_check()).await
    }

    pub async fn get_metrics(&self) -> JsonObject {
        best_effort("get_metrics", self.client().get_metrics()).await
    }

    pub async fn get_metrics_summary(&self) -> JsonObject {
        best_effort("get_metrics_summary", self.client().get_metrics_summary()).await
    }

    /// Audit trail of the configured user.
    pub async fn get_audit_logs(&self, limit: u64) -> Vec<Value> {
        best_effort(
            "get_audit_logs",
            self.client().get_audit_logs(Some(self.user()), limit),
        )
        .await
    }

    pub async fn get_user_analytics(&self) -> JsonObject {
        best_effort(
            "get_user_analytics",
            self.client().get_user_analytics(self.user()),
        )
        .await
    }

    pub async fn get_memory_growth(&self, days: u64) -> JsonObject {
        best_effort(
            "get_memory_growth",
            self.client().get_memory_growth(self.user(), days),
        )
        .await
    }
}
