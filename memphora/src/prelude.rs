//! Common imports for most memphora applications.

pub use crate::{
    Invocation, Memphora, MemphoraConfig, MemphoraError, MemphoraErrorKind, RememberOutput,
    Remembered, Resolved, best_effort, init, remember,
};
pub use crate::{mp_invocation, mp_turn, mp_turns};
pub use crate::{
    AdvancedSearchOptions, ApiError, ApiErrorKind, ComplianceEvent, ContextSearchOptions,
    Conversation, ImageMemory, JsonObject, MemoryClient, MetadataMap, RetentionPolicy,
    SearchOptions, Turn, TurnRole, WebhookUpdate,
};
