use mclient::{AdvancedSearchOptions, ContextSearchOptions};
use mcommon::{JsonObject, value_to_text};
use serde_json::Value;

use crate::{Memphora, best_effort};

/// Budget used by the enhanced search helpers unless the caller overrides it.
pub fn enhanced_search_defaults() -> ContextSearchOptions {
    ContextSearchOptions::budget(1500, 15)
}

fn context_field(result: &JsonObject) -> String {
    result.get("context").map(value_to_text).unwrap_or_default()
}

impl Memphora {
    pub async fn search_advanced(
        &self,
        query: &str,
        options: &AdvancedSearchOptions,
    ) -> Vec<Value> {
        best_effort(
            "search_advanced",
            self.client().search_advanced(self.user(), query, options),
        )
        .await
    }

    pub async fn search_optimized(
        &self,
        query: &str,
        options: &ContextSearchOptions,
    ) -> JsonObject {
        best_effort(
            "search_optimized",
            self.client().search_optimized(self.user(), query, options),
        )
        .await
    }

    pub async fn search_enhanced(
        &self,
        query: &str,
        options: &ContextSearchOptions,
    ) -> JsonObject {
        best_effort(
            "search_enhanced",
            self.client().search_enhanced(self.user(), query, options),
        )
        .await
    }

    /// The server-assembled `context` string of an optimized search.
    pub async fn get_optimized_context(
        &self,
        query: &str,
        options: &ContextSearchOptions,
    ) -> String {
        context_field(&self.search_optimized(query, options).await)
    }

    /// The server-assembled `context` string of an enhanced search.
    pub async fn get_enhanced_context(
        &self,
        query: &str,
        options: &ContextSearchOptions,
    ) -> String {
        context_field(&self.search_enhanced(query, options).await)
    }

    pub async fn concise(&self, text: &str) -> JsonObject {
        best_effort("concise", self.client().concise_text(text)).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn enhanced_defaults_use_smaller_budget() {
        let options = enhanced_search_defaults();
        assert_eq!(options.max_tokens, 1500);
        assert_eq!(options.max_memories, 15);
        assert!(options.use_compression);
    }

    #[test]
    fn missing_context_field_reads_as_empty() {
        let mut result = JsonObject::new();
        assert_eq!(context_field(&result), "");
        result.insert("context".to_string(), json!("likes tea"));
        assert_eq!(context_field(&result), "likes tea");
    }
}
