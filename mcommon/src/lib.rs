//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use mcommon::{JsonObject, UserId, is_truthy};
//! use serde_json::json;
//!
//! let user = UserId::from("user-1");
//! let mut metadata = JsonObject::new();
//! metadata.insert("source".to_string(), json!("chat"));
//!
//! assert_eq!(user.as_str(), "user-1");
//! assert!(is_truthy(&json!("hello")));
//! assert!(!is_truthy(&json!({})));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use mcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Cross-crate identifier newtypes.
    //!
    //! ```rust
    //! use mcommon::UserId;
    //!
    //! let user = UserId::new("user-42");
    //! assert_eq!(user.to_string(), "user-42");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UserId(String);

    impl UserId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }

        pub fn is_blank(&self) -> bool {
            self.0.trim().is_empty()
        }
    }

    impl Display for UserId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for UserId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for UserId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod json {
    //! JSON payload aliases and value helpers shared by the facade and the SDK.
    //!
    //! ```rust
    //! use mcommon::{is_truthy, value_to_text};
    //! use serde_json::json;
    //!
    //! assert!(!is_truthy(&json!(0)));
    //! assert!(is_truthy(&json!([1])));
    //! assert_eq!(value_to_text(&json!("plain")), "plain");
    //! assert_eq!(value_to_text(&json!(42)), "42");
    //! ```

    use serde_json::{Map, Value};

    /// A JSON object as returned by single-entity endpoints.
    pub type JsonObject = Map<String, Value>;

    /// Free-form memory metadata. Keys are unordered.
    pub type MetadataMap = Map<String, Value>;

    /// Mirrors the truthiness rules callers expect from dynamic payloads:
    /// `null`, `false`, zero, and empty strings/arrays/objects are falsy.
    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    /// Strings are returned without quotes; everything else uses its JSON form.
    pub fn value_to_text(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

pub mod registry {
    //! Generic registry map wrapper used by runtime registries.
    //!
    //! ```rust
    //! use mcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert!(registry.contains_key("alpha"));
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: HashMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.items.keys()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::UserId;
pub use future::BoxFuture;
pub use json::{JsonObject, MetadataMap, is_truthy, value_to_text};
pub use registry::Registry;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Registry, UserId, is_truthy, value_to_text};

    #[test]
    fn user_id_newtype_round_trips_strings() {
        let user = UserId::new("user-1");
        assert_eq!(user.as_str(), "user-1");
        assert_eq!(user.to_string(), "user-1");
        assert!(!user.is_blank());
        assert!(UserId::from("   ").is_blank());
    }

    #[test]
    fn truthiness_follows_empty_value_rules() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!({"k": 1})));
    }

    #[test]
    fn value_to_text_unquotes_strings_only() {
        assert_eq!(value_to_text(&json!("hi")), "hi");
        assert_eq!(value_to_text(&json!(true)), "true");
        assert_eq!(value_to_text(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn generic_registry_basic_lifecycle() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert("alpha".to_string(), 1_u32);
        assert_eq!(registry.get("alpha"), Some(&1));
        assert!(registry.contains_key("alpha"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.keys().count(), 1);
    }
}
