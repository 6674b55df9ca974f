use mclient::{Conversation, Turn};
use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, best_effort};

impl Memphora {
    pub async fn record_conversation(&self, conversation: &Conversation) -> JsonObject {
        best_effort(
            "record_conversation",
            self.client()
                .record_conversation(self.user(), conversation),
        )
        .await
    }

    pub async fn get_conversations(&self, platform: Option<&str>, limit: u64) -> Vec<Value> {
        best_effort(
            "get_conversations",
            self.client()
                .get_user_conversations(self.user(), platform, limit),
        )
        .await
    }

    pub async fn summarize_conversation(
        &self,
        conversation: &[Turn],
        summary_type: &str,
    ) -> JsonObject {
        best_effort(
            "summarize_conversation",
            self.client()
                .summarize_conversation(conversation, summary_type),
        )
        .await
    }
}
