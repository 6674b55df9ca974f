use mcommon::{JsonObject, MetadataMap};
use mtransport::{ApiError, ApiRequest};
use serde_json::{Value, json};

use crate::MemoryClient;

impl MemoryClient {
    pub async fn add_memory(
        &self,
        user_id: &str,
        content: &str,
        metadata: Option<MetadataMap>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("add_memory", "memories").with_json(json!({
            "user_id": user_id,
            "content": content,
            "metadata": metadata.unwrap_or_default(),
        })))
        .await
    }

    pub async fn get_memory(&self, memory_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_memory", format!("memories/{memory_id}")))
            .await
    }

    pub async fn get_user_memories(
        &self,
        user_id: &str,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get("get_user_memories", format!("memories/user/{user_id}"))
                .with_query("limit", limit),
        )
        .await
    }

    /// Omitted fields are left untouched by the service.
    pub async fn update_memory(
        &self,
        memory_id: &str,
        content: Option<&str>,
        metadata: Option<MetadataMap>,
    ) -> Result<JsonObject, ApiError> {
        let mut body = JsonObject::new();
        if let Some(content) = content {
            body.insert("content".to_string(), json!(content));
        }
        if let Some(metadata) = metadata {
            body.insert("metadata".to_string(), Value::Object(metadata));
        }

        self.send_object(
            ApiRequest::put("update_memory", format!("memories/{memory_id}"))
                .with_json(Value::Object(body)),
        )
        .await
    }

    /// Any successful response counts as deleted; the body is ignored.
    pub async fn delete_memory(&self, memory_id: &str) -> Result<bool, ApiError> {
        self.send_raw(
            ApiRequest::delete("delete_memory", format!("memories/{memory_id}")).ignoring_body(),
        )
        .await?;
        Ok(true)
    }

    pub async fn extract_from_content(
        &self,
        user_id: &str,
        content: &str,
        metadata: Option<MetadataMap>,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::post("extract_from_content", "memories/extract").with_json(json!({
                "user_id": user_id,
                "content": content,
                "metadata": metadata.unwrap_or_default(),
            })),
        )
        .await
    }

    pub async fn create_advanced_memory(
        &self,
        user_id: &str,
        content: &str,
        metadata: Option<MetadataMap>,
        link_to: Vec<String>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("create_advanced_memory", "memories/advanced").with_json(json!({
                "user_id": user_id,
                "content": content,
                "metadata": metadata.unwrap_or_default(),
                "link_to": link_to,
            })),
        )
        .await
    }

    pub async fn batch_create(
        &self,
        user_id: &str,
        memories: Vec<Value>,
        link_related: bool,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(ApiRequest::post("batch_create", "memories/batch").with_json(json!({
            "user_id": user_id,
            "memories": memories,
            "link_related": link_related,
        })))
        .await
    }

    /// `merge_strategy` is one of `combine`, `keep_latest` or `keep_most_relevant`.
    pub async fn merge_memories(
        &self,
        memory_ids: Vec<String>,
        merge_strategy: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("merge_memories", "memories/merge").with_json(json!({
            "memory_ids": memory_ids,
            "merge_strategy": merge_strategy,
        })))
        .await
    }

    pub async fn export_memories(&self, user_id: &str, format: &str) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::get("export_memories", format!("users/{user_id}/export"))
                .with_query("format", format),
        )
        .await
    }

    pub async fn import_memories(
        &self,
        user_id: &str,
        data: &str,
        format: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("import_memories", format!("users/{user_id}/import"))
                .with_query("format", format)
                .with_json(json!({ "data": data })),
        )
        .await
    }

    pub async fn get_user_statistics(&self, user_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get(
            "get_user_statistics",
            format!("users/{user_id}/statistics"),
        ))
        .await
    }

    pub async fn get_global_statistics(&self) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_global_statistics", "statistics"))
            .await
    }

    pub async fn delete_all_user_memories(&self, user_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::delete(
            "delete_all_user_memories",
            format!("users/{user_id}/memories"),
        ))
        .await
    }

    pub async fn get_summary(&self, user_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get("get_summary", format!("memory/summary/{user_id}")))
            .await
    }
}
