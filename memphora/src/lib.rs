//! Memory-as-a-service client with automatic recall.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the workspace crates and adds a user-scoped [`Memphora`]
//! client whose convenience operations never fail, plus [`Remembered`]
//! wrappers that inject past context into arbitrary async functions.
//!
//! ```rust,no_run
//! use memphora::{Memphora, MemphoraConfig};
//!
//! # async fn demo() -> Result<(), memphora::MemphoraError> {
//! memphora::mobserve::init_logging();
//!
//! let memory = Memphora::new(MemphoraConfig::from_env("user-1"))?;
//! memory.store("I prefer green tea", None).await;
//! let hits = memory.search("what do I drink?", 10).await;
//!
//! // Facade operations keep their error contract.
//! let version = memory.get_version("v-1").await?;
//! # let _ = (hits, version);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod convenience;
mod delegate;
mod error;
mod macros;
mod normalize;

pub mod prelude;
pub mod remember;
pub mod util;

pub use mclient;
pub use mcommon;
pub use mobserve;
pub use mtransport;

pub use mclient::{
    AdvancedSearchOptions, ComplianceEvent, ContextSearchOptions, Conversation, ImageMemory,
    Memory, MemoryClient, OperationTable, RetentionPolicy, SearchOptions, Turn, TurnRole,
    WebhookUpdate,
};
pub use mcommon::{JsonObject, MetadataMap, UserId};
pub use mtransport::{ApiError, ApiErrorKind, RetryPolicy, SessionHooks};

pub use client::{DEFAULT_CONTEXT_LIMIT, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, Memphora};
pub use config::{API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL, DEFAULT_MAX_TOKENS, MemphoraConfig};
pub use convenience::enhanced_search_defaults;
pub use delegate::{DelegatedOperation, OWN_OPERATIONS, Resolved};
pub use error::{MemphoraError, MemphoraErrorKind};
pub use normalize::best_effort;
pub use remember::{Invocation, RememberOutput, Remembered};
pub use util::{init, remember};

#[cfg(test)]
mod tests {
    use crate::{Invocation, TurnRole};

    #[test]
    fn mp_turn_macro_creates_expected_turn() {
        let turn = crate::mp_turn!(user => "hello");
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.content, "hello");
    }

    #[test]
    fn mp_turns_macro_builds_turn_vector() {
        let turns = crate::mp_turns![
            system => "Be brief.",
            user => "Summarize my week",
        ];

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, TurnRole::System);
        assert_eq!(turns[1].role, TurnRole::User);
    }

    #[test]
    fn mp_invocation_macro_splits_positional_and_named() {
        let invocation = crate::mp_invocation!("first"; user_message => "hi");
        assert_eq!(
            invocation,
            Invocation::new()
                .with_arg("first")
                .with_kwarg("user_message", "hi")
        );
        assert_eq!(invocation.probe(1).as_deref(), Some("hi"));
    }
}
