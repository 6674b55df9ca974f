use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::Value;

use crate::MemoryClient;

impl MemoryClient {
    pub async fn find_contradictions(
        &self,
        memory_id: &str,
        similarity_threshold: f64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get(
                "find_contradictions",
                format!("memories/{memory_id}/contradictions"),
            )
            .with_query("similarity_threshold", similarity_threshold),
        )
        .await
    }

    /// `relationship_type` is one of `related`, `contradicts`, `supports` or `extends`.
    pub async fn link_memories(
        &self,
        memory_id: &str,
        target_id: &str,
        relationship_type: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("link_memories", format!("memories/{memory_id}/link"))
                .with_query("target_id", target_id)
                .with_query("relationship_type", relationship_type),
        )
        .await
    }

    pub async fn get_memory_context(
        &self,
        memory_id: &str,
        depth: u64,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::get("get_memory_context", format!("memories/{memory_id}/context"))
                .with_query("depth", depth),
        )
        .await
    }

    pub async fn find_memory_path(
        &self,
        source_id: &str,
        target_id: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get(
            "find_memory_path",
            format!("memories/{source_id}/path/{target_id}"),
        ))
        .await
    }
}
