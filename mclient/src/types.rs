//! Records exchanged with the memory service.

use mcommon::MetadataMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: MetadataMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Memory {
    /// Lenient parse: payloads that are not memory-shaped yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
    System,
}

impl TurnRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(TurnRole::System, content)
    }
}

/// Ordered turns plus the optional platform tag and metadata sent when a
/// conversation is recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "conversation")]
    pub turns: Vec<Turn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub metadata: MetadataMap,
}

impl Conversation {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self {
            turns,
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self
    }
}

pub fn turns_to_value(turns: &[Turn]) -> Value {
    Value::Array(
        turns
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role,
                    "content": turn.content,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn memory_parses_partial_payloads() {
        let memory = Memory::from_value(&json!({"id": "m1", "content": "likes tea"}));
        assert_eq!(memory.id.as_deref(), Some("m1"));
        assert_eq!(memory.content, "likes tea");
        assert!(memory.metadata.is_empty());

        assert_eq!(Memory::from_value(&json!("not a memory")), Memory::default());
    }

    #[test]
    fn turns_serialize_with_lowercase_roles() {
        let value = turns_to_value(&[Turn::user("hi"), Turn::assistant("hello")]);
        assert_eq!(
            value,
            json!([
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "hello"}
            ])
        );
        assert_eq!(TurnRole::parse("system"), Some(TurnRole::System));
        assert_eq!(TurnRole::parse("tool"), None);
    }

    #[test]
    fn conversation_reads_server_shape() {
        let object = json!({
            "id": "c1",
            "conversation": [{"role": "user", "content": "hi"}],
            "platform": "slack"
        });
        let conversation: Conversation = serde_json::from_value(object).expect("parses");

        assert_eq!(conversation.id.as_deref(), Some("c1"));
        assert_eq!(conversation.turns, vec![Turn::user("hi")]);
        assert_eq!(conversation.platform.as_deref(), Some("slack"));
    }
}
