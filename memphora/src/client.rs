//! The high-level, user-scoped client.

use std::ops::Deref;
use std::sync::Arc;

use mclient::{Memory, MemoryClient, SearchOptions, Turn};
use mcommon::{JsonObject, MetadataMap, UserId};
use mobserve::{SafeSessionHooks, TracingSessionHooks};
use mtransport::{ApiError, AuthContext, ReqwestTransport, Session};
use serde_json::Value;

use crate::normalize::{best_effort, log_failure};
use crate::remember::{Remembered, fit_to_budget, format_context};
use crate::{MemphoraConfig, MemphoraError};

pub const DEFAULT_SEARCH_LIMIT: u64 = 10;
pub const DEFAULT_CONTEXT_LIMIT: u64 = 5;
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Best-effort client bound to one user.
///
/// Convenience methods log failures and return empty values. Every
/// [`MemoryClient`] operation not shadowed here is reachable through `Deref`
/// and keeps the facade's error contract.
///
/// ```rust
/// use memphora::{Memphora, MemphoraConfig};
///
/// let memory = Memphora::new(MemphoraConfig::new("user-1")).expect("valid config");
/// assert_eq!(memory.user_id().as_str(), "user-1");
///
/// // Facade operations are available directly.
/// let _ = memory.session().retry_policy();
/// ```
#[derive(Debug, Clone)]
pub struct Memphora {
    client: MemoryClient,
    user_id: UserId,
    auto_compress: bool,
    max_tokens: usize,
}

impl Memphora {
    pub fn new(config: MemphoraConfig) -> Result<Self, MemphoraError> {
        config.validate()?;

        let transport = ReqwestTransport::with_timeout(config.timeout)?
            .with_base_url(config.api_url.clone());
        let hooks = config
            .hooks
            .clone()
            .unwrap_or_else(|| Arc::new(SafeSessionHooks::new(TracingSessionHooks)));
        let mut session = Session::new(Arc::new(transport), AuthContext::new(config.api_key.clone()))
            .with_retry_policy(config.retry_policy.clone())
            .with_hooks(hooks);
        if let Some(sleeper) = config.sleeper.clone() {
            session = session.with_sleeper(sleeper);
        }

        tracing::info!(
            user_id = %config.user_id,
            api_url = %config.api_url,
            authenticated = session.auth().is_authenticated(),
            "memphora client initialized"
        );

        Ok(Self::from_client(&config, MemoryClient::new(session)))
    }

    /// Wraps an existing facade; transport settings in `config` are ignored.
    pub fn from_client(config: &MemphoraConfig, client: MemoryClient) -> Self {
        Self {
            client,
            user_id: config.user_id.clone(),
            auto_compress: config.auto_compress,
            max_tokens: config.max_tokens,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn client(&self) -> &MemoryClient {
        &self.client
    }

    pub fn auto_compress(&self) -> bool {
        self.auto_compress
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub(crate) fn user(&self) -> &str {
        self.user_id.as_str()
    }

    /// Wraps `func` so each call recalls related memories first and records
    /// the exchange afterwards.
    pub fn remember<F>(&self, func: F) -> Remembered<F> {
        Remembered::new(self.clone(), func)
    }

    pub async fn store(&self, content: &str, metadata: Option<MetadataMap>) -> JsonObject {
        best_effort(
            "store",
            self.client
                .add_memory(self.user(), content, Some(metadata.unwrap_or_default())),
        )
        .await
    }

    pub async fn search(&self, query: &str, limit: u64) -> Vec<Value> {
        self.search_with(query, &SearchOptions::default().with_limit(limit))
            .await
    }

    /// Search with reranking and provider keys.
    pub async fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<Value> {
        best_effort(
            "search",
            self.client.search_memories(self.user(), query, options),
        )
        .await
    }

    /// [`Memphora::search`] with each hit parsed into a [`Memory`]. Hits that
    /// are not memory-shaped come back as empty records.
    pub async fn search_records(&self, query: &str, limit: u64) -> Vec<Memory> {
        self.search(query, limit)
            .await
            .iter()
            .map(Memory::from_value)
            .collect()
    }

    /// Formatted recall block for `query`, or `""` when nothing matches or
    /// the search fails. Trimmed to `max_tokens` when compression is on.
    pub async fn get_context(&self, query: &str, limit: u64) -> String {
        tracing::debug!(
            operation = "get_context",
            user_id = %self.user_id,
            query_chars = query.len(),
            limit
        );
        let memories = best_effort(
            "get_context",
            self.client.search_memories(
                self.user(),
                query,
                &SearchOptions::default().with_limit(limit),
            ),
        )
        .await;

        if self.auto_compress {
            fit_to_budget(&memories, self.max_tokens)
        } else {
            format_context(&memories)
        }
    }

    /// Sends one user/assistant exchange for server-side memory extraction.
    pub async fn store_conversation(&self, user_message: &str, ai_response: &str) {
        let turns = [Turn::user(user_message), Turn::assistant(ai_response)];
        best_effort("store_conversation", async {
            self.client
                .extract_from_conversation(self.user(), &turns)
                .await
                .map(|_| ())
        })
        .await
    }

    pub async fn clear(&self) -> bool {
        best_effort("clear", async {
            self.client
                .delete_all_user_memories(self.user())
                .await
                .map(|_| true)
        })
        .await
    }

    pub async fn list_memories(&self, limit: u64) -> Vec<Value> {
        best_effort(
            "list_memories",
            self.client.get_user_memories(self.user(), limit),
        )
        .await
    }

    pub async fn get_memory(&self, memory_id: &str) -> JsonObject {
        best_effort("get_memory", self.client.get_memory(memory_id)).await
    }

    pub async fn update_memory(
        &self,
        memory_id: &str,
        content: Option<&str>,
        metadata: Option<MetadataMap>,
    ) -> JsonObject {
        best_effort(
            "update_memory",
            self.client.update_memory(memory_id, content, metadata),
        )
        .await
    }

    pub async fn delete_memory(&self, memory_id: &str) -> bool {
        best_effort("delete_memory", self.client.delete_memory(memory_id)).await
    }

    /// Unlike the other convenience methods, only a missing conversation
    /// maps to `{}`; every other failure is returned.
    pub async fn get_conversation(&self, conversation_id: &str) -> Result<JsonObject, ApiError> {
        match self.client.get_conversation(conversation_id).await {
            Ok(conversation) => Ok(conversation),
            Err(error) if error.is_not_found() => Ok(JsonObject::new()),
            Err(error) => {
                log_failure("get_conversation", &error);
                Err(error)
            }
        }
    }
}

impl Deref for Memphora {
    type Target = MemoryClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
