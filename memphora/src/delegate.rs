//! Name-based lookup across the convenience surface and the facade.
//!
//! ```rust
//! use memphora::{Memphora, MemphoraConfig, Resolved};
//!
//! let memory = Memphora::new(MemphoraConfig::new("user-1")).expect("valid config");
//!
//! assert!(matches!(memory.resolve("store"), Ok(Resolved::Own(_))));
//! assert!(matches!(memory.resolve("get_version"), Ok(Resolved::Delegated(_))));
//! assert!(memory.resolve("teleport").is_err());
//! ```

use mclient::{MemoryClient, OperationHandler};
use mcommon::JsonObject;
use serde_json::Value;

use crate::{Memphora, MemphoraError};

/// Names answered by [`Memphora`] itself. These shadow facade operations
/// of the same name.
pub const OWN_OPERATIONS: &[&str] = &[
    "apply_retention_policies",
    "auto_compress",
    "batch_store",
    "clear",
    "client",
    "compare_versions",
    "concise",
    "create_webhook",
    "decrypt_data",
    "delete_gdpr",
    "delete_memory",
    "delete_webhook",
    "encrypt_data",
    "export",
    "export_gdpr",
    "find_contradictions",
    "find_path",
    "get_agent_memories",
    "get_audit_logs",
    "get_compliance_report",
    "get_context",
    "get_context_for_memory",
    "get_conversation",
    "get_conversations",
    "get_enhanced_context",
    "get_group_context",
    "get_memory",
    "get_memory_growth",
    "get_metrics",
    "get_metrics_summary",
    "get_optimized_context",
    "get_related_memories",
    "get_statistics",
    "get_summary",
    "get_user_analytics",
    "get_versions",
    "get_webhook",
    "health",
    "import_memories",
    "link",
    "list_memories",
    "list_webhooks",
    "max_tokens",
    "merge",
    "record_compliance_event",
    "record_conversation",
    "remember",
    "rollback",
    "search",
    "search_advanced",
    "search_agent_memories",
    "search_enhanced",
    "search_group_memories",
    "search_images",
    "search_optimized",
    "search_records",
    "search_with",
    "set_retention_policy",
    "store",
    "store_agent_memory",
    "store_conversation",
    "store_group_memory",
    "store_image",
    "summarize_conversation",
    "test_webhook",
    "update_memory",
    "update_webhook",
    "upload_image",
    "user_id",
];

#[derive(Debug)]
pub enum Resolved<'a> {
    /// Answered by a typed method on [`Memphora`].
    Own(&'static str),
    /// Forwarded to the facade without error normalization.
    Delegated(DelegatedOperation<'a>),
}

/// A facade operation bound to a client, callable with JSON arguments.
pub struct DelegatedOperation<'a> {
    client: &'a MemoryClient,
    name: String,
    handler: OperationHandler,
}

impl std::fmt::Debug for DelegatedOperation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatedOperation")
            .field("name", &self.name)
            .finish()
    }
}

impl DelegatedOperation<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn call(&self, args: JsonObject) -> Result<Value, MemphoraError> {
        Ok((self.handler)(self.client, args).await?)
    }
}

impl Memphora {
    pub fn resolve(&self, name: &str) -> Result<Resolved<'_>, MemphoraError> {
        if let Some(own) = OWN_OPERATIONS.iter().copied().find(|own| *own == name) {
            return Ok(Resolved::Own(own));
        }

        match MemoryClient::operations().get(name) {
            Some(handler) => Ok(Resolved::Delegated(DelegatedOperation {
                client: self.client(),
                name: name.to_string(),
                handler,
            })),
            None => Err(MemphoraError::unknown_operation(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_operations_are_sorted_and_unique() {
        let mut sorted = OWN_OPERATIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, OWN_OPERATIONS);
    }

    #[test]
    fn every_facade_operation_resolves() {
        let memory = crate::Memphora::new(crate::MemphoraConfig::new("user-1"))
            .expect("valid config");
        for name in MemoryClient::operations().names() {
            assert!(memory.resolve(name).is_ok(), "{name} should resolve");
        }
    }
}
