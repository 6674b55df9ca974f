//! Typed operation facade over the memphora memory service.
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use mclient::{MemoryClient, SearchOptions};
//!
//! # async fn demo() -> Result<(), mtransport::ApiError> {
//! let client = MemoryClient::connect(
//!     "https://api.memphora.ai/api/v1",
//!     Some("sk-test".to_string()),
//!     Duration::from_secs(30),
//! )?;
//! let created = client.add_memory("user-1", "prefers green tea", None).await?;
//! let hits = client
//!     .search_memories("user-1", "tea", &SearchOptions::default())
//!     .await?;
//! # let _ = (created, hits);
//! # Ok(())
//! # }
//! ```

pub mod args;
mod client;
mod operations;
mod shape;
mod table;
mod types;

pub mod prelude {
    pub use crate::{
        AdvancedSearchOptions, ComplianceEvent, ContextSearchOptions, Conversation, ImageMemory,
        Memory, MemoryClient, OperationHandler, OperationTable, RetentionPolicy, SearchOptions,
        Turn, TurnRole, WebhookUpdate,
    };
    pub use mtransport::{ApiError, ApiErrorKind};
}

pub use client::{
    AdvancedSearchOptions, ComplianceEvent, ContextSearchOptions, ImageMemory, MemoryClient,
    RetentionPolicy, SearchOptions, WebhookUpdate,
};
pub use shape::{expect_list, expect_object, unwrap_logs};
pub use table::{OperationHandler, OperationTable};
pub use types::{Conversation, Memory, Turn, TurnRole, turns_to_value};
