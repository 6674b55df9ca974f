//! The operation facade: one async method per service endpoint.

use std::sync::Arc;
use std::time::Duration;

use mcommon::JsonObject;
use mtransport::{ApiError, ApiRequest, AuthContext, ReqwestTransport, Session};
use serde_json::Value;

use crate::shape::{expect_list, expect_object};

/// Low-level client. Every method issues exactly one logical call through the
/// shared [`Session`] and returns `Err` on any unrecovered failure.
#[derive(Debug, Clone)]
pub struct MemoryClient {
    session: Arc<Session>,
}

impl MemoryClient {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(session),
        }
    }

    pub fn from_shared(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Builds a reqwest-backed session with the given per-attempt timeout.
    pub fn connect(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::with_timeout(timeout)?.with_base_url(base_url);
        Ok(Self::new(Session::new(
            Arc::new(transport),
            AuthContext::new(api_key),
        )))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) async fn send_object(&self, request: ApiRequest) -> Result<JsonObject, ApiError> {
        let operation = request.operation;
        expect_object(operation, self.session.send(request).await?)
    }

    pub(crate) async fn send_list(&self, request: ApiRequest) -> Result<Vec<Value>, ApiError> {
        let operation = request.operation;
        expect_list(operation, self.session.send(request).await?)
    }

    pub(crate) async fn send_raw(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.session.send(request).await
    }
}

/// Options for [`MemoryClient::search_memories`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub limit: u64,
    pub rerank: bool,
    pub rerank_provider: String,
    pub cohere_api_key: Option<String>,
    pub jina_api_key: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            rerank: false,
            rerank_provider: "auto".to_string(),
            cohere_api_key: None,
            jina_api_key: None,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_rerank(mut self, provider: impl Into<String>) -> Self {
        self.rerank = true;
        self.rerank_provider = provider.into();
        self
    }
}

/// Options for [`MemoryClient::search_advanced`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedSearchOptions {
    pub limit: u64,
    pub filters: JsonObject,
    pub include_related: bool,
    pub min_score: f64,
    pub sort_by: String,
}

impl Default for AdvancedSearchOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            filters: JsonObject::new(),
            include_related: false,
            min_score: 0.0,
            sort_by: "relevance".to_string(),
        }
    }
}

/// Token-budgeted search options shared by the optimized and enhanced
/// endpoints. `use_cache` is only sent to the optimized endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSearchOptions {
    pub max_tokens: u64,
    pub max_memories: u64,
    pub use_compression: bool,
    pub use_cache: bool,
}

impl Default for ContextSearchOptions {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            max_memories: 20,
            use_compression: true,
            use_cache: true,
        }
    }
}

impl ContextSearchOptions {
    pub fn budget(max_tokens: u64, max_memories: u64) -> Self {
        Self {
            max_tokens,
            max_memories,
            ..Self::default()
        }
    }
}

/// Partial webhook update; absent fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookUpdate {
    pub url: Option<String>,
    pub events: Option<Vec<String>>,
    pub secret: Option<String>,
    pub active: Option<bool>,
}

/// Image memory payload; absent fields are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageMemory {
    pub image_url: Option<String>,
    pub image_base64: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<JsonObject>,
}

/// Compliance event payload; absent identifiers are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceEvent {
    pub compliance_type: String,
    pub event_type: String,
    pub user_id: Option<String>,
    pub organization_id: Option<String>,
    pub data_subject_id: Option<String>,
    pub details: Option<JsonObject>,
}

impl ComplianceEvent {
    pub fn new(compliance_type: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            compliance_type: compliance_type.into(),
            event_type: event_type.into(),
            ..Self::default()
        }
    }
}

/// Retention policy payload; absent scopes are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub data_type: String,
    pub retention_days: u64,
    pub organization_id: Option<String>,
    pub user_id: Option<String>,
    pub auto_delete: bool,
}

impl RetentionPolicy {
    pub fn new(data_type: impl Into<String>, retention_days: u64) -> Self {
        Self {
            data_type: data_type.into(),
            retention_days,
            ..Self::default()
        }
    }
}
