use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest};
use serde_json::{Value, json};

use crate::types::turns_to_value;
use crate::{Conversation, MemoryClient, Turn};

impl MemoryClient {
    /// Sends turns for server-side memory extraction.
    pub async fn extract_from_conversation(
        &self,
        user_id: &str,
        conversation: &[Turn],
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::post("extract_from_conversation", "conversations/extract").with_json(
                json!({
                    "user_id": user_id,
                    "conversation": turns_to_value(conversation),
                }),
            ),
        )
        .await
    }

    pub async fn record_conversation(
        &self,
        user_id: &str,
        conversation: &Conversation,
    ) -> Result<JsonObject, ApiError> {
        let platform = conversation
            .platform
            .as_deref()
            .filter(|platform| !platform.is_empty())
            .unwrap_or("unknown");

        self.send_object(
            ApiRequest::post("record_conversation", "conversations/record").with_json(json!({
                "user_id": user_id,
                "conversation": turns_to_value(&conversation.turns),
                "platform": platform,
                "metadata": conversation.metadata,
            })),
        )
        .await
    }

    pub async fn get_conversation(&self, conversation_id: &str) -> Result<JsonObject, ApiError> {
        self.send_object(ApiRequest::get(
            "get_conversation",
            format!("conversations/{conversation_id}"),
        ))
        .await
    }

    pub async fn get_user_conversations(
        &self,
        user_id: &str,
        platform: Option<&str>,
        limit: u64,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_list(
            ApiRequest::get(
                "get_user_conversations",
                format!("conversations/user/{user_id}"),
            )
            .with_query("limit", limit)
            .with_optional_query("platform", platform.filter(|platform| !platform.is_empty())),
        )
        .await
    }

    /// `summary_type` is one of `brief`, `detailed`, `topics` or `action_items`.
    pub async fn summarize_conversation(
        &self,
        conversation: &[Turn],
        summary_type: &str,
    ) -> Result<JsonObject, ApiError> {
        self.send_object(
            ApiRequest::post("summarize_conversation", "conversations/summarize").with_json(
                json!({
                    "conversation": turns_to_value(conversation),
                    "summary_type": summary_type,
                }),
            ),
        )
        .await
    }
}
