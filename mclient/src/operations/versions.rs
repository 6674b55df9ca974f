use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::{Value, json};

use crate::MemoryClient;

impl MemoryClient {
    pub async fn get_memory_versions(
        &self,
        memory_id: &str,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get("get_memory_versions", format!("memories/{memory_id}/versions"))
                .with_query("limit", limit),
        )
        .await
    }

    pub async fn get_version(&self, version_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_version", format!("versions/{version_id}")))
            .await
    }

    pub async fn get_version_history(
        &self,
        memory_id: &str,
        from_version: Option<u64>,
        to_version: Option<u64>,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get("get_version_history", format!("memories/{memory_id}/history"))
                .with_optional_query("from_version", from_version)
                .with_optional_query("to_version", to_version),
        )
        .await
    }

    pub async fn rollback_memory(
        &self,
        memory_id: &str,
        target_version: u64,
        user_id: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("rollback_memory", format!("memories/{memory_id}/rollback"))
                .with_query("user_id", user_id)
                .with_json(json!({ "target_version": target_version })),
        )
        .await
    }

    pub async fn compare_versions(
        &self,
        version_id_1: &str,
        version_id_2: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::get("compare_versions", "versions/compare")
                .with_query("version_id_1", version_id_1)
                .with_query("version_id_2", version_id_2),
        )
        .await
    }
}
