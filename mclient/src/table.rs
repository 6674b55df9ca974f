//! Name-indexed forwarding table over every facade operation.
//!
//! ```rust
//! use mclient::MemoryClient;
//!
//! let table = MemoryClient::operations();
//! assert!(table.contains("find_memory_path"));
//! assert!(!table.contains("teleport"));
//! ```

use std::sync::OnceLock;

use mcommon::{BoxFuture, JsonObject, Registry};
use mtransport::ApiError;
use serde_json::Value;

use crate::args::{
    bool_or, bytes, f64_or, object_or_empty, optional_bool, optional_object,
    optional_string, optional_string_list, optional_u64, required_list, required_string,
    required_u64, string_list, string_or, turns, u64_or,
};
use crate::{
    AdvancedSearchOptions, ComplianceEvent, ContextSearchOptions, Conversation, ImageMemory,
    MemoryClient, RetentionPolicy, SearchOptions, WebhookUpdate,
};

pub type OperationHandler =
    for<'a> fn(&'a MemoryClient, JsonObject) -> BoxFuture<'a, Result<Value, ApiError>>;

pub struct OperationTable {
    handlers: Registry<&'static str, OperationHandler>,
}

impl std::fmt::Debug for OperationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationTable")
            .field("operations", &self.names())
            .finish()
    }
}

impl OperationTable {
    fn build() -> Self {
        let mut handlers: Registry<&'static str, OperationHandler> = Registry::new();
        for (name, handler) in HANDLERS {
            handlers.insert(*name, *handler);
        }
        Self { handlers }
    }

    pub fn get(&self, name: &str) -> Option<OperationHandler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub async fn call(
        &self,
        client: &MemoryClient,
        name: &str,
        args: JsonObject,
    ) -> Result<Value, ApiError> {
        let handler = self
            .get(name)
            .ok_or_else(|| ApiError::invalid_request(format!("unknown operation '{name}'")))?;
        handler(client, args).await
    }
}

impl MemoryClient {
    /// Built on first use and shared for the rest of the process.
    pub fn operations() -> &'static OperationTable {
        static TABLE: OnceLock<OperationTable> = OnceLock::new();
        TABLE.get_or_init(OperationTable::build)
    }
}

macro_rules! handlers {
    ($($name:ident => |$client:ident, $args:ident| $body:block)*) => {
        $(
            fn $name<'a>(
                $client: &'a MemoryClient,
                $args: JsonObject,
            ) -> BoxFuture<'a, Result<Value, ApiError>> {
                Box::pin(async move { $body })
            }
        )*

        const HANDLERS: &[(&str, OperationHandler)] = &[
            $((stringify!($name), $name as OperationHandler)),*
        ];
    };
}

fn object(value: JsonObject) -> Result<Value, ApiError> {
    Ok(Value::Object(value))
}

fn list(value: Vec<Value>) -> Result<Value, ApiError> {
    Ok(Value::Array(value))
}

fn boolean(value: bool) -> Result<Value, ApiError> {
    Ok(Value::Bool(value))
}

handlers! {
    add_memory => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let content = required_string(&args, "content")?;
        let metadata = optional_object(&args, "metadata")?;
        object(client.add_memory(&user_id, &content, metadata).await?)
    }
    get_memory => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        object(client.get_memory(&memory_id).await?)
    }
    get_user_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let limit = u64_or(&args, "limit", 100)?;
        list(client.get_user_memories(&user_id, limit).await?)
    }
    search_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let query = required_string(&args, "query")?;
        let options = SearchOptions {
            limit: u64_or(&args, "limit", 5)?,
            rerank: bool_or(&args, "rerank", false)?,
            rerank_provider: string_or(&args, "rerank_provider", "auto")?,
            cohere_api_key: optional_string(&args, "cohere_api_key")?,
            jina_api_key: optional_string(&args, "jina_api_key")?,
        };
        list(client.search_memories(&user_id, &query, &options).await?)
    }
    update_memory => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let content = optional_string(&args, "content")?;
        let metadata = optional_object(&args, "metadata")?;
        object(client.update_memory(&memory_id, content.as_deref(), metadata).await?)
    }
    delete_memory => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        boolean(client.delete_memory(&memory_id).await?)
    }
    extract_from_conversation => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let conversation = turns(&args, "conversation")?;
        list(client.extract_from_conversation(&user_id, &conversation).await?)
    }
    extract_from_content => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let content = required_string(&args, "content")?;
        let metadata = optional_object(&args, "metadata")?;
        list(client.extract_from_content(&user_id, &content, metadata).await?)
    }
    create_advanced_memory => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let content = required_string(&args, "content")?;
        let metadata = optional_object(&args, "metadata")?;
        let link_to = string_list(&args, "link_to")?;
        object(client.create_advanced_memory(&user_id, &content, metadata, link_to).await?)
    }
    search_advanced => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let query = required_string(&args, "query")?;
        let options = AdvancedSearchOptions {
            limit: u64_or(&args, "limit", 5)?,
            filters: object_or_empty(&args, "filters")?,
            include_related: bool_or(&args, "include_related", false)?,
            min_score: f64_or(&args, "min_score", 0.0)?,
            sort_by: string_or(&args, "sort_by", "relevance")?,
        };
        list(client.search_advanced(&user_id, &query, &options).await?)
    }
    batch_create => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let memories = required_list(&args, "memories")?;
        let link_related = bool_or(&args, "link_related", true)?;
        list(client.batch_create(&user_id, memories, link_related).await?)
    }
    merge_memories => |client, args| {
        let memory_ids = string_list(&args, "memory_ids")?;
        let strategy = string_or(&args, "merge_strategy", "combine")?;
        object(client.merge_memories(memory_ids, &strategy).await?)
    }
    find_contradictions => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let threshold = f64_or(&args, "similarity_threshold", 0.7)?;
        list(client.find_contradictions(&memory_id, threshold).await?)
    }
    link_memories => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let target_id = required_string(&args, "target_id")?;
        let relationship = string_or(&args, "relationship_type", "related")?;
        object(client.link_memories(&memory_id, &target_id, &relationship).await?)
    }
    get_memory_context => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let depth = u64_or(&args, "depth", 2)?;
        object(client.get_memory_context(&memory_id, depth).await?)
    }
    find_memory_path => |client, args| {
        let source_id = required_string(&args, "source_id")?;
        let target_id = required_string(&args, "target_id")?;
        object(client.find_memory_path(&source_id, &target_id).await?)
    }
    export_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let format = string_or(&args, "format", "json")?;
        object(client.export_memories(&user_id, &format).await?)
    }
    import_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let data = required_string(&args, "data")?;
        let format = string_or(&args, "format", "json")?;
        object(client.import_memories(&user_id, &data, &format).await?)
    }
    get_user_statistics => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        object(client.get_user_statistics(&user_id).await?)
    }
    get_global_statistics => |client, _args| {
        object(client.get_global_statistics().await?)
    }
    delete_all_user_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        object(client.delete_all_user_memories(&user_id).await?)
    }
    set_retention_policy => |client, args| {
        let policy = RetentionPolicy {
            data_type: required_string(&args, "data_type")?,
            retention_days: required_u64(&args, "retention_days")?,
            organization_id: optional_string(&args, "organization_id")?,
            user_id: optional_string(&args, "user_id")?,
            auto_delete: bool_or(&args, "auto_delete", false)?,
        };
        object(client.set_retention_policy(policy).await?)
    }
    apply_retention_policies => |client, args| {
        let organization_id = optional_string(&args, "organization_id")?;
        let user_id = optional_string(&args, "user_id")?;
        object(
            client
                .apply_retention_policies(organization_id.as_deref(), user_id.as_deref())
                .await?,
        )
    }
    get_memory_versions => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let limit = u64_or(&args, "limit", 50)?;
        list(client.get_memory_versions(&memory_id, limit).await?)
    }
    get_version => |client, args| {
        let version_id = required_string(&args, "version_id")?;
        object(client.get_version(&version_id).await?)
    }
    get_version_history => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let from_version = optional_u64(&args, "from_version")?;
        let to_version = optional_u64(&args, "to_version")?;
        list(client.get_version_history(&memory_id, from_version, to_version).await?)
    }
    rollback_memory => |client, args| {
        let memory_id = required_string(&args, "memory_id")?;
        let target_version = required_u64(&args, "target_version")?;
        let user_id = required_string(&args, "user_id")?;
        object(client.rollback_memory(&memory_id, target_version, &user_id).await?)
    }
    compare_versions => |client, args| {
        let first = required_string(&args, "version_id_1")?;
        let second = required_string(&args, "version_id_2")?;
        object(client.compare_versions(&first, &second).await?)
    }
    record_conversation => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let mut conversation = Conversation::new(turns(&args, "conversation")?);
        conversation.platform = optional_string(&args, "platform")?;
        conversation.metadata = object_or_empty(&args, "metadata")?;
        object(client.record_conversation(&user_id, &conversation).await?)
    }
    get_conversation => |client, args| {
        let conversation_id = required_string(&args, "conversation_id")?;
        object(client.get_conversation(&conversation_id).await?)
    }
    get_user_conversations => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let platform = optional_string(&args, "platform")?;
        let limit = u64_or(&args, "limit", 50)?;
        list(client.get_user_conversations(&user_id, platform.as_deref(), limit).await?)
    }
    summarize_conversation => |client, args| {
        let conversation = turns(&args, "conversation")?;
        let summary_type = string_or(&args, "summary_type", "brief")?;
        object(client.summarize_conversation(&conversation, &summary_type).await?)
    }
    search_optimized => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let query = required_string(&args, "query")?;
        let options = ContextSearchOptions {
            max_tokens: u64_or(&args, "max_tokens", 2000)?,
            max_memories: u64_or(&args, "max_memories", 20)?,
            use_compression: bool_or(&args, "use_compression", true)?,
            use_cache: bool_or(&args, "use_cache", true)?,
        };
        object(client.search_optimized(&user_id, &query, &options).await?)
    }
    search_enhanced => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let query = required_string(&args, "query")?;
        let options = ContextSearchOptions {
            max_tokens: u64_or(&args, "max_tokens", 2000)?,
            max_memories: u64_or(&args, "max_memories", 20)?,
            use_compression: bool_or(&args, "use_compression", true)?,
            use_cache: true,
        };
        object(client.search_enhanced(&user_id, &query, &options).await?)
    }
    concise_text => |client, args| {
        let text = required_string(&args, "text")?;
        object(client.concise_text(&text).await?)
    }
    store_image => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let image = ImageMemory {
            image_url: optional_string(&args, "image_url")?,
            image_base64: optional_string(&args, "image_base64")?,
            description: optional_string(&args, "description")?,
            metadata: optional_object(&args, "metadata")?,
        };
        object(client.store_image(&user_id, image).await?)
    }
    upload_image => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let image_data = bytes(&args, "image_data")?;
        let filename = required_string(&args, "filename")?;
        object(client.upload_image(&user_id, image_data, &filename).await?)
    }
    search_images => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let query = required_string(&args, "query")?;
        let limit = u64_or(&args, "limit", 5)?;
        list(client.search_images(&user_id, &query, limit).await?)
    }
    export_gdpr => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        object(client.export_gdpr(&user_id).await?)
    }
    delete_gdpr => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        object(client.delete_gdpr(&user_id).await?)
    }
    record_compliance_event => |client, args| {
        let event = ComplianceEvent {
            compliance_type: required_string(&args, "compliance_type")?,
            event_type: required_string(&args, "event_type")?,
            user_id: optional_string(&args, "user_id")?,
            organization_id: optional_string(&args, "organization_id")?,
            data_subject_id: optional_string(&args, "data_subject_id")?,
            details: optional_object(&args, "details")?,
        };
        object(client.record_compliance_event(event).await?)
    }
    encrypt_data => |client, args| {
        let data = required_string(&args, "data")?;
        object(client.encrypt_data(&data).await?)
    }
    decrypt_data => |client, args| {
        let encrypted = required_string(&args, "encrypted_data")?;
        object(client.decrypt_data(&encrypted).await?)
    }
    get_compliance_report => |client, args| {
        let organization_id = required_string(&args, "organization_id")?;
        let compliance_type = optional_string(&args, "compliance_type")?;
        object(
            client
                .get_compliance_report(&organization_id, compliance_type.as_deref())
                .await?,
        )
    }
    health_check => |client, _args| {
        object(client.health_check().await?)
    }
    create_webhook => |client, args| {
        let url = required_string(&args, "url")?;
        let events = string_list(&args, "events")?;
        let secret = optional_string(&args, "secret")?;
        object(client.create_webhook(&url, events, secret.as_deref()).await?)
    }
    list_webhooks => |client, args| {
        let user_id = optional_string(&args, "user_id")?;
        list(client.list_webhooks(user_id.as_deref()).await?)
    }
    get_webhook => |client, args| {
        let webhook_id = required_string(&args, "webhook_id")?;
        object(client.get_webhook(&webhook_id).await?)
    }
    update_webhook => |client, args| {
        let webhook_id = required_string(&args, "webhook_id")?;
        let update = WebhookUpdate {
            url: optional_string(&args, "url")?,
            events: optional_string_list(&args, "events")?,
            secret: optional_string(&args, "secret")?,
            active: optional_bool(&args, "active")?,
        };
        object(client.update_webhook(&webhook_id, update).await?)
    }
    delete_webhook => |client, args| {
        let webhook_id = required_string(&args, "webhook_id")?;
        object(client.delete_webhook(&webhook_id).await?)
    }
    test_webhook => |client, args| {
        let webhook_id = required_string(&args, "webhook_id")?;
        object(client.test_webhook(&webhook_id).await?)
    }
    get_metrics => |client, _args| {
        object(client.get_metrics().await?)
    }
    get_metrics_summary => |client, _args| {
        object(client.get_metrics_summary().await?)
    }
    get_audit_logs => |client, args| {
        let user_id = optional_string(&args, "user_id")?;
        let limit = u64_or(&args, "limit", 100)?;
        list(client.get_audit_logs(user_id.as_deref(), limit).await?)
    }
    get_summary => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        object(client.get_summary(&user_id).await?)
    }
    store_agent_memory => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let agent_id = required_string(&args, "agent_id")?;
        let content = required_string(&args, "content")?;
        let run_id = optional_string(&args, "run_id")?;
        let metadata = optional_object(&args, "metadata")?;
        object(
            client
                .store_agent_memory(&user_id, &agent_id, &content, run_id.as_deref(), metadata)
                .await?,
        )
    }
    search_agent_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let agent_id = required_string(&args, "agent_id")?;
        let query = required_string(&args, "query")?;
        let run_id = optional_string(&args, "run_id")?;
        let limit = u64_or(&args, "limit", 10)?;
        list(
            client
                .search_agent_memories(&user_id, &agent_id, &query, run_id.as_deref(), limit)
                .await?,
        )
    }
    get_agent_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let agent_id = required_string(&args, "agent_id")?;
        let limit = u64_or(&args, "limit", 100)?;
        list(client.get_agent_memories(&user_id, &agent_id, limit).await?)
    }
    store_group_memory => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let group_id = required_string(&args, "group_id")?;
        let content = required_string(&args, "content")?;
        let metadata = optional_object(&args, "metadata")?;
        object(client.store_group_memory(&user_id, &group_id, &content, metadata).await?)
    }
    search_group_memories => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let group_id = required_string(&args, "group_id")?;
        let query = required_string(&args, "query")?;
        let limit = u64_or(&args, "limit", 10)?;
        list(client.search_group_memories(&user_id, &group_id, &query, limit).await?)
    }
    get_group_context => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let group_id = required_string(&args, "group_id")?;
        let limit = u64_or(&args, "limit", 50)?;
        object(client.get_group_context(&user_id, &group_id, limit).await?)
    }
    get_user_analytics => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        object(client.get_user_analytics(&user_id).await?)
    }
    get_memory_growth => |client, args| {
        let user_id = required_string(&args, "user_id")?;
        let days = u64_or(&args, "days", 30)?;
        object(client.get_memory_growth(&user_id, days).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use mcommon::BoxFuture;
    use mtransport::{
        ApiErrorKind, ApiRequest, AuthContext, HttpMethod, HttpTransport, RetryPolicy, Session,
    };
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default)]
    struct CapturingTransport {
        requests: Mutex<Vec<ApiRequest>>,
        replies: Mutex<VecDeque<Result<Value, ApiError>>>,
    }

    impl HttpTransport for CapturingTransport {
        fn execute<'a>(
            &'a self,
            request: &'a ApiRequest,
            _auth: &'a AuthContext,
        ) -> BoxFuture<'a, Result<Value, ApiError>> {
            Box::pin(async move {
                self.requests
                    .lock()
                    .expect("requests lock")
                    .push(request.clone());
                self.replies
                    .lock()
                    .expect("replies lock")
                    .pop_front()
                    .unwrap_or(Ok(Value::Null))
            })
        }
    }

    fn client(transport: Arc<CapturingTransport>) -> MemoryClient {
        MemoryClient::new(
            Session::new(transport, AuthContext::anonymous())
                .with_retry_policy(RetryPolicy::disabled()),
        )
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn table_covers_every_endpoint_once() {
        let table = MemoryClient::operations();
        assert_eq!(table.len(), HANDLERS.len());
        assert_eq!(table.len(), 63);
        for name in [
            "add_memory",
            "search_memories",
            "find_memory_path",
            "get_audit_logs",
            "get_memory_growth",
            "upload_image",
        ] {
            assert!(table.contains(name), "{name}");
        }
        let names = table.names();
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn handler_applies_defaults_and_dispatches() {
        let transport = Arc::new(CapturingTransport::default());
        transport
            .replies
            .lock()
            .expect("replies lock")
            .push_back(Ok(json!([{"id": "m1"}])));
        let client = client(Arc::clone(&transport));

        let value = MemoryClient::operations()
            .call(
                &client,
                "search_memories",
                args(json!({"user_id": "u1", "query": "tea"})),
            )
            .await
            .expect("search dispatches");

        assert_eq!(value, json!([{"id": "m1"}]));
        let requests = transport.requests.lock().expect("requests lock");
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "memories/search");
        assert_eq!(
            requests[0].body,
            Some(json!({
                "user_id": "u1",
                "query": "tea",
                "limit": 5,
                "rerank": false,
                "rerank_provider": "auto"
            }))
        );
    }

    #[tokio::test]
    async fn missing_argument_fails_before_any_request() {
        let transport = Arc::new(CapturingTransport::default());
        let client = client(Arc::clone(&transport));

        let error = MemoryClient::operations()
            .call(&client, "find_memory_path", args(json!({"source_id": "a"})))
            .await
            .expect_err("target is required");

        assert_eq!(error.kind, ApiErrorKind::InvalidRequest);
        assert!(transport.requests.lock().expect("requests lock").is_empty());
    }

    #[tokio::test]
    async fn unknown_name_is_invalid_request() {
        let transport = Arc::new(CapturingTransport::default());
        let client = client(transport);

        let error = MemoryClient::operations()
            .call(&client, "teleport", JsonObject::new())
            .await
            .expect_err("unknown");
        assert_eq!(error.kind, ApiErrorKind::InvalidRequest);
    }

    #[tokio::test]
    async fn handler_propagates_service_errors() {
        let transport = Arc::new(CapturingTransport::default());
        transport
            .replies
            .lock()
            .expect("replies lock")
            .push_back(Err(ApiError::from_status(404, "missing")));
        let client = client(Arc::clone(&transport));

        let handler = MemoryClient::operations()
            .get("find_memory_path")
            .expect("registered");
        let error = handler(&client, args(json!({"source_id": "a", "target_id": "b"})))
            .await
            .expect_err("404");

        assert!(error.is_not_found());
        assert_eq!(
            transport.requests.lock().expect("requests lock")[0].path,
            "memories/a/path/b"
        );
    }
}
