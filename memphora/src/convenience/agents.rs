use mcommon::{JsonObject, MetadataMap};
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn store_agent_memory(
        &self,
        agent_id: &str,
        content: &str,
        run_id: Option<&str>,
        metadata: Option<MetadataMap>,
    ) -> JsonObject {
        best_effort(
            "store_agent_memory",
            self.client()
                .store_agent_memory(self.user(), agent_id, content, run_id, metadata),
        )
        .await
    }

    pub async fn search_agent_memories(
        &self,
        agent_id: &str,
        query: &str,
        run_id: Option<&str>,
        limit: u64,
    ) -> Vec<Value> {
        best_effort(
            "search_agent_memories",
            self.client()
                .search_agent_memories(self.user(), agent_id, query, run_id, limit),
        )
        .await
    }

    pub async fn get_agent_memories(&self, agent_id: &str, limit: u64) -> Vec<Value> {
        best_effort(
            "get_agent_memories",
            self.client()
                .get_agent_memories(self.user(), agent_id, limit),
        )
        .await
    }

    pub async fn store_group_memory(
        &self,
        group_id: &str,
        content: &str,
        metadata: Option<MetadataMap>,
    ) -> JsonObject {
        best_effort(
            "store_group_memory",
            self.client()
                .store_group_memory(self.user(), group_id, content, metadata),
        )
        .await
    }

    pub async fn search_group_memories(
        &self,
        group_id: &str,
        query: &str,
        limit: u64,
    ) -> Vec<Value> {
        best_effort(
            "search_group_memories",
            self.client()
                .search_group_memories(self.user(), group_id, query, limit),
        )
        .await
    }

    pub async fn get_group_context(&self, group_id: &str, limit: u64) -> JsonObject {
        best_effort(
            "get_group_context",
            self.client()
                .get_group_context(self.user(), group_id, limit),
        )
        .await
    }
}
