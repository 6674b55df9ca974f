use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn batch_store(&self, memories: Vec<Value>, link_related: bool) -> Vec<Value> {
        best_effort(
            "batch_store",
            self.client()
                .batch_create(self.user(), memories, link_related),
        )
        .await
    }

    pub async fn merge(&self, memory_ids: Vec<String>, merge_strategy: &str) -> JsonObject {
        best_effort(
            "merge",
            self.client().merge_memories(memory_ids, merge_strategy),
        )
        .await
    }

    pub async fn get_statistics(&self) -> JsonObject {
        best_effort(
            "get_statistics",
            self.client().get_user_statistics(self.user()),
        )
        .await
    }

    pub async fn get_summary(&self) -> JsonObject {
        best_effort("get_summary", self.client().get_summary(self.user())).await
    }

    pub async fn export(&self, format: &str) -> JsonObject {
        best_effort(
            "export",
            self.client().export_memories(self.user(), format),
        )
        .await
    }

    pub async fn import_memories(&self, data: &str, format: &str) -> JsonObject {
        best_effort(
            "import_memories",
            self.client().import_memories(self.user(), data, format),
        )
        .await
    }

    pub async fn get_versions(&self, memory_id: &str, limit: u64) -> Vec<Value> {
        best_effort(
            "get_versions",
            self.client().get_memory_versions(memory_id, limit),
        )
        .await
    }

    pub async fn rollback(&self, memory_id: &str, target_version: u64) -> JsonObject {
        best_effort(
            "rollback",
            self.client()
                .rollback_memory(memory_id, target_version, self.user()),
        )
        .await
    }

    pub async fn compare_versions(&self, version_id_1: &str, version_id_2: &str) -> JsonObject {
        best_effort(
            "compare_versions",
            self.client().compare_versions(version_id_1, version_id_2),
        )
        .await
    }
}
