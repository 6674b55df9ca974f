use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    /// Neighbours one hop away, at most `limit` of them.
    pub async fn get_related_memories(&self, memory_id: &str, limit: usize) -> Vec<Value> {
        let context = best_effort(
            "get_related_memories",
            self.client().get_memory_context(memory_id, 1),
        )
        .await;

        match context.get("related_memories") {
            Some(Value::Array(related)) => related.iter().take(limit).cloned().collect(),
            _ => Vec::new(),
        }
    }

    pub async fn get_context_for_memory(&self, memory_id: &str, depth: u64) -> JsonObject {
        best_effort(
            "get_context_for_memory",
            self.client().get_memory_context(memory_id, depth),
        )
        .await
    }

    pub async fn find_contradictions(&self, memory_id: &str, threshold: f64) -> Vec<Value> {
        best_effort(
            "find_contradictions",
            self.client().find_contradictions(memory_id, threshold),
        )
        .await
    }

    pub async fn link(
        &self,
        memory_id: &str,
        target_id: &str,
        relationship_type: &str,
    ) -> JsonObject {
        best_effort(
            "link",
            self.client()
                .link_memories(memory_id, target_id, relationship_type),
        )
        .await
    }

    pub async fn find_path(&self, source_id: &str, target_id: &str) -> JsonObject {
        best_effort(
            "find_path",
            self.client().find_memory_path(source_id, target_id),
        )
        .await
    }
}
