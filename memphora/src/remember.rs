//! Automatic recall around arbitrary async functions.
//!
//! A [`Remembered`] wrapper looks for the user's message in an
//! [`Invocation`], fetches related memories before the call, hands them to
//! the function as `memory_context`, and records the exchange afterwards.
//!
//! ```rust,no_run
//! use memphora::{Invocation, Memphora, MemphoraConfig};
//!
//! # async fn demo() -> Result<(), memphora::MemphoraError> {
//! let memory = Memphora::new(MemphoraConfig::new("user-1").with_api_key("sk-test"))?;
//!
//! let chat = memory.remember(|invocation: Invocation| async move {
//!     let context = invocation.memory_context().unwrap_or_default().to_string();
//!     format!("answer using: {context}")
//! });
//!
//! let reply = chat
//!     .call(Invocation::new().with_kwarg("message", "what tea do I like?"))
//!     .await;
//! # let _ = reply;
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use mcommon::{JsonObject, is_truthy, value_to_text};
use serde_json::Value;

use crate::Memphora;

pub const CONTEXT_HEADER: &str = "Relevant context from past conversations:";
pub const MEMORY_CONTEXT_KEY: &str = "memory_context";
/// Named arguments checked for the user's message, highest priority first.
pub const PROBE_KEYS: [&str; 3] = ["message", "user_message", "query"];
/// Memories fetched per recall.
pub const RECALL_LIMIT: u64 = 5;

/// Arguments of one call through a [`Remembered`] wrapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub args: Vec<Value>,
    pub kwargs: JsonObject,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    pub fn kwarg(&self, key: &str) -> Option<&Value> {
        self.kwargs.get(key)
    }

    pub fn kwarg_str(&self, key: &str) -> Option<&str> {
        self.kwargs.get(key).and_then(Value::as_str)
    }

    /// Context injected by the wrapper, present only when a message was found.
    pub fn memory_context(&self) -> Option<&str> {
        self.kwarg_str(MEMORY_CONTEXT_KEY)
    }

    /// The first probe key present decides, even when its value is empty.
    /// Otherwise the first positional argument is used, provided the wrapped
    /// function declares at least one parameter. Null counts as no message.
    pub fn probe(&self, parameter_count: usize) -> Option<String> {
        let named = PROBE_KEYS.iter().find_map(|key| self.kwargs.get(*key));
        let value = match named {
            Some(value) => value,
            None if parameter_count > 0 => self.args.first()?,
            None => return None,
        };
        if value.is_null() {
            return None;
        }
        let text = value_to_text(value);

        (!text.is_empty()).then_some(text)
    }
}

/// Return values a wrapped function may produce. Falsy results are not
/// recorded as conversation turns.
pub trait RememberOutput {
    fn is_truthy(&self) -> bool;

    fn to_memory_text(&self) -> String;
}

impl RememberOutput for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    fn to_memory_text(&self) -> String {
        self.clone()
    }
}

impl RememberOutput for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    fn to_memory_text(&self) -> String {
        (*self).to_string()
    }
}

impl RememberOutput for Value {
    fn is_truthy(&self) -> bool {
        is_truthy(self)
    }

    fn to_memory_text(&self) -> String {
        value_to_text(self)
    }
}

impl<T: RememberOutput> RememberOutput for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(RememberOutput::is_truthy)
    }

    fn to_memory_text(&self) -> String {
        self.as_ref()
            .map(RememberOutput::to_memory_text)
            .unwrap_or_default()
    }
}

impl<T: RememberOutput, E> RememberOutput for Result<T, E> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_ok_and(RememberOutput::is_truthy)
    }

    fn to_memory_text(&self) -> String {
        self.as_ref()
            .map(RememberOutput::to_memory_text)
            .unwrap_or_default()
    }
}

/// Renders search hits as a bulleted context block, or `""` when there are
/// none. Hits without a `content` field render as empty bullets.
pub fn format_context(memories: &[Value]) -> String {
    if memories.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(memories.len() + 1);
    lines.push(CONTEXT_HEADER.to_string());
    for memory in memories {
        lines.push(bullet(memory));
    }
    lines.join("\n")
}

fn bullet(memory: &Value) -> String {
    let content = memory.get("content").map(value_to_text).unwrap_or_default();
    format!("- {content}")
}

/// Rough token estimate: four characters per token, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

/// Like [`format_context`], but keeps the block within `max_tokens`.
///
/// Memories are dropped whole from the end. The first one always stays and
/// is cut to the remaining character room when it alone is too long; if
/// the header already exhausts the budget it is kept uncut.
pub fn fit_to_budget(memories: &[Value], max_tokens: usize) -> String {
    let Some((first, rest)) = memories.split_first() else {
        return String::new();
    };

    let max_chars = max_tokens.saturating_mul(4);
    let mut context = format!("{CONTEXT_HEADER}\n");
    let mut used = context.chars().count();

    let first = bullet(first);
    let room = max_chars.saturating_sub(used);
    if room == 0 || first.chars().count() <= room {
        used += first.chars().count();
        context.push_str(&first);
    } else {
        used += room;
        context.extend(first.chars().take(room));
    }

    for memory in rest {
        let next = format!("\n{}", bullet(memory));
        let next_chars = next.chars().count();
        if used + next_chars > max_chars {
            break;
        }
        used += next_chars;
        context.push_str(&next);
    }

    context
}

/// A function wrapped with automatic recall. Built by
/// [`Memphora::remember`] or [`crate::util::remember`].
#[derive(Debug, Clone)]
pub struct Remembered<F> {
    memory: Memphora,
    func: F,
    parameter_count: usize,
}

impl<F> Remembered<F> {
    pub(crate) fn new(memory: Memphora, func: F) -> Self {
        Self {
            memory,
            func,
            parameter_count: 1,
        }
    }

    /// Number of parameters the wrapped function declares. With zero, a
    /// positional argument is never treated as the user's message.
    pub fn with_parameter_count(mut self, parameter_count: usize) -> Self {
        self.parameter_count = parameter_count;
        self
    }

    pub fn memory(&self) -> &Memphora {
        &self.memory
    }

    pub fn into_inner(self) -> F {
        self.func
    }

    pub async fn call<Fut, R>(&self, mut invocation: Invocation) -> R
    where
        F: Fn(Invocation) -> Fut,
        Fut: Future<Output = R>,
        R: RememberOutput,
    {
        let probe = invocation.probe(self.parameter_count);

        if let Some(message) = probe.as_deref() {
            let context = self.memory.get_context(message, RECALL_LIMIT).await;
            tracing::debug!(
                phase = "remember",
                event = "context_injected",
                user_id = %self.memory.user_id(),
                context_chars = context.len()
            );
            invocation
                .kwargs
                .insert(MEMORY_CONTEXT_KEY.to_string(), Value::String(context));
        }

        let result = (self.func)(invocation).await;

        if let Some(message) = probe
            && result.is_truthy()
        {
            self.memory
                .store_conversation(&message, &result.to_memory_text())
                .await;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn probe_prefers_named_message_keys_in_order() {
        let invocation = Invocation::new()
            .with_arg("positional")
            .with_kwarg("query", "from query")
            .with_kwarg("user_message", "from user_message");
        assert_eq!(invocation.probe(1).as_deref(), Some("from user_message"));

        let invocation = invocation.with_kwarg("message", "from message");
        assert_eq!(invocation.probe(1).as_deref(), Some("from message"));
    }

    #[test]
    fn probe_falls_back_to_first_positional_argument() {
        let invocation = Invocation::new().with_arg(42).with_arg("second");
        assert_eq!(invocation.probe(2).as_deref(), Some("42"));
        assert_eq!(invocation.probe(0), None);
        assert_eq!(Invocation::new().probe(1), None);
    }

    #[test]
    fn empty_or_null_message_counts_as_none() {
        let empty = Invocation::new()
            .with_arg("ignored")
            .with_kwarg("message", "");
        assert_eq!(empty.probe(1), None);

        let null = Invocation::new().with_kwarg("message", Value::Null);
        assert_eq!(null.probe(1), None);

        let null_positional = Invocation::new().with_arg(Value::Null).with_arg("second");
        assert_eq!(null_positional.probe(2), None);
    }

    #[test]
    fn truthiness_follows_wrapped_value() {
        assert!("hi".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(!Option::<String>::None.is_truthy());
        assert!(Some("x".to_string()).is_truthy());
        assert!(!Result::<String, ()>::Err(()).is_truthy());
        assert!(Result::<&str, ()>::Ok("ok").is_truthy());
        assert!(!json!({}).is_truthy());
        assert!(!json!(0).is_truthy());
        assert_eq!(json!({"a": 1}).to_memory_text(), r#"{"a":1}"#);
    }

    #[test]
    fn context_lists_contents_under_header() {
        let memories = vec![json!({"content": "a"}), json!({"content": "b"})];
        assert_eq!(
            format_context(&memories),
            "Relevant context from past conversations:\n- a\n- b"
        );
        assert_eq!(format_context(&[]), "");
        assert_eq!(
            format_context(&[json!({"id": "m1"})]),
            "Relevant context from past conversations:\n- "
        );
    }

    #[test]
    fn budget_drops_whole_trailing_memories() {
        let memories = vec![
            json!({"content": "x".repeat(40)}),
            json!({"content": format!("{}\n{}", "y".repeat(10), "z".repeat(10))}),
        ];
        let context = format_context(&memories);
        assert_eq!(estimate_tokens(&context), 27);

        assert_eq!(fit_to_budget(&memories, 27), context);
        assert_eq!(fit_to_budget(&[], 27), "");

        let trimmed = fit_to_budget(&memories, 25);
        assert_eq!(trimmed, format!("{CONTEXT_HEADER}\n- {}", "x".repeat(40)));
        assert!(!trimmed.contains('y'));
    }

    #[test]
    fn oversized_first_memory_is_cut_not_dropped() {
        let memories = vec![json!({"content": "x".repeat(2100)}), json!({"content": "y"})];

        let context = fit_to_budget(&memories, 500);
        assert!(context.starts_with(CONTEXT_HEADER));
        assert_eq!(context.chars().count(), 2000);
        assert!(estimate_tokens(&context) <= 500);
        assert!(!context.contains('y'));

        let tight = fit_to_budget(&memories, 15);
        assert_eq!(tight, format!("{CONTEXT_HEADER}\n- {}", "x".repeat(16)));

        let starved = fit_to_budget(&memories[..1], 5);
        assert_eq!(starved, format!("{CONTEXT_HEADER}\n- {}", "x".repeat(2100)));
    }
}
