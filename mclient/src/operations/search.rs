use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::{Value, json};

use crate::{AdvancedSearchOptions, ContextSearchOptions, MemoryClient, SearchOptions};

impl MemoryClient {
    pub async fn search_memories(
        &self,
        user_id: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Value>, ApiError> {
        let mut body = json!({
            "user_id": user_id,
            "query": query,
            "limit": options.limit,
            "rerank": options.rerank,
            "rerank_provider": options.rerank_provider,
        });
        if let Some(payload) = body.as_object_mut() {
            if let Some(key) = options.cohere_api_key.as_deref().filter(|key| !key.is_empty()) {
                payload.insert("cohere_api_key".to_string(), json!(key));
            }
            if let Some(key) = options.jina_api_key.as_deref().filter(|key| !key.is_empty()) {
                payload.insert("jina_api_key".to_string(), json!(key));
            }
        }

        tracing::debug!(user_id, limit = options.limit, "searching memories");
        let results = self
            .send_list(ApiRequest::post("search_memories", "memories/search").with_json(body))
            .await?;
        tracing::debug!(count = results.len(), "memory search returned");
        Ok(results)
    }

    pub async fn search_advanced(
        &self,
        user_id: &str,
        query: &str,
        options: &AdvancedSearchOptions,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::post("search_advanced", "memories/search/advanced").with_json(json!({
                "user_id": user_id,
                "query": query,
                "limit": options.limit,
                "filters": options.filters,
                "include_related": options.include_related,
                "min_score": options.min_score,
                "sort_by": options.sort_by,
            })),
        )
        .await
    }

    pub async fn search_optimized(
        &self,
        user_id: &str,
        query: &str,
        options: &ContextSearchOptions,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("search_optimized", "memories/search/optimized").with_json(json!({
                "user_id": user_id,
                "query": query,
                "max_tokens": options.max_tokens,
                "max_memories": options.max_memories,
                "use_compression": options.use_compression,
                "use_cache": options.use_cache,
            })),
        )
        .await
    }

    pub async fn search_enhanced(
        &self,
        user_id: &str,
        query: &str,
        options: &ContextSearchOptions,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("search_enhanced", "memories/search/enhanced").with_json(json!({
                "user_id": user_id,
                "query": query,
                "max_tokens": options.max_tokens,
                "max_memories": options.max_memories,
                "use_compression": options.use_compression,
            })),
        )
        .await
    }

    pub async fn concise_text(&self, text: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::post("concise_text", "text/conciser").with_json(json!({
            "text": text,
        })))
        .await
    }
}
