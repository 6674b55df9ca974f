use mcommon::{JsonObject, MetadataMap};
use mtransport::{ApiError, ApiRequest};
use serde_json::{Value, json};

use crate::MemoryClient;

impl MemoryClient {
    pub async fn store_agent_memory(
        &self,
        user_id: &str,
        agent_id: &str,
        content: &str,
        run_id: Option<&str>,
        metadata: Option<MetadataMap>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("store_agent_memory", "agents/memories").with_json(json!({
                "user_id": user_id,
                "agent_id": agent_id,
                "content": content,
                "run_id": run_id,
                "metadata": metadata.unwrap_or_default(),
            })),
        )
        .await
    }

    pub async fn search_agent_memories(
        &self,
        user_id: &str,
        agent_id: &str,
        query: &str,
        run_id: Option<&str>,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::post("search_agent_memories", "agents/memories/search").with_json(json!({
                "user_id": user_id,
                "agent_id": agent_id,
                "query": query,
                "run_id": run_id,
                "limit": limit,
            })),
        )
        .await
    }

    pub async fn get_agent_memories(
        &self,
        user_id: &str,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get("get_agent_memories", format!("agents/{agent_id}/memories"))
                .with_query("user_id", user_id)
                .with_query("limit", limit),
        )
        .await
    }

    pub async fn store_group_memory(
        &self,
        user_id: &str,
        group_id: &str,
        content: &str,
        metadata: Option<MetadataMap>,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("store_group_memory", "groups/memories").with_json(json!({
                "user_id": user_id,
                "group_id": group_id,
                "content": content,
                "metadata": metadata.unwrap_or_default(),
            })),
        )
        .await
    }

    pub async fn search_group_memories(
        &self,
        user_id: &str,
        group_id: &str,
        query: &str,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::post("search_group_memories", "groups/memories/search").with_json(json!({
                "user_id": user_id,
                "group_id": group_id,
                "query": query,
                "limit": limit,
            })),
        )
        .await
    }

    pub async fn get_group_context(
        &self,
        user_id: &str,
        group_id: &str,
        limit: u64,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::get("get_group_context", format!("groups/{group_id}/context"))
                .with_query("user_id", user_id)
                .with_query("limit", limit),
        )
        .await
    }
}
