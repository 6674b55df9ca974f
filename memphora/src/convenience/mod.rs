//! Best-effort wrappers over the facade, scoped to the configured user.
//!
//! Each method returns the facade payload on success and an empty value
//! (`{}`, `[]`, `false`, `""`) after logging on failure.

mod agents;
mod compliance;
mod conversations;
mod graph;
mod media;
mod memories;
mod observability;
mod search;
mod webhooks;

pub use search::enhanced_search_defaults;
