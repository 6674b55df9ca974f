//! JSON argument extraction for operations dispatched by name.
//!
//! ```rust
//! use mclient::args::{required_string, u64_or};
//! use serde_json::json;
//!
//! let args = json!({"query": "rust"});
//! let args = args.as_object().expect("object");
//! assert_eq!(required_string(args, "query").expect("query"), "rust");
//! assert_eq!(u64_or(args, "limit", 5).expect("limit"), 5);
//! ```

use mcommon::{JsonObject, value_to_text};
use mtransport::ApiError;
use serde_json::Value;

use crate::{Turn, TurnRole};

fn present<'a>(args: &'a JsonObject, key: &str) -> Option<&'a Value> {
    args.get(key).filter(|value| !value.is_null())
}

fn invalid(key: &str, expected: &str) -> ApiError {
    ApiError::invalid_request(format!("argument '{key}' must be {expected}"))
}

pub fn required_string(args: &JsonObject, key: &str) -> Result<String, ApiError> {
    optional_string(args, key)?
        .ok_or_else(|| ApiError::invalid_request(format!("missing required string: '{key}'")))
}

pub fn optional_string(args: &JsonObject, key: &str) -> Result<Option<String>, ApiError> {
    match present(args, key) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(invalid(key, "a string")),
    }
}

pub fn string_or(args: &JsonObject, key: &str, default: &str) -> Result<String, ApiError> {
    Ok(optional_string(args, key)?.unwrap_or_else(|| default.to_string()))
}

pub fn optional_u64(args: &JsonObject, key: &str) -> Result<Option<u64>, ApiError> {
    match present(args, key) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| invalid(key, "a non-negative integer")),
    }
}

pub fn required_u64(args: &JsonObject, key: &str) -> Result<u64, ApiError> {
    optional_u64(args, key)?
        .ok_or_else(|| ApiError::invalid_request(format!("missing required integer: '{key}'")))
}

pub fn u64_or(args: &JsonObject, key: &str, default: u64) -> Result<u64, ApiError> {
    Ok(optional_u64(args, key)?.unwrap_or(default))
}

pub fn f64_or(args: &JsonObject, key: &str, default: f64) -> Result<f64, ApiError> {
    match present(args, key) {
        None => Ok(default),
        Some(value) => value.as_f64().ok_or_else(|| invalid(key, "a number")),
    }
}

pub fn optional_bool(args: &JsonObject, key: &str) -> Result<Option<bool>, ApiError> {
    match present(args, key) {
        None => Ok(None),
        Some(value) => value.as_bool().map(Some).ok_or_else(|| invalid(key, "a boolean")),
    }
}

pub fn bool_or(args: &JsonObject, key: &str, default: bool) -> Result<bool, ApiError> {
    Ok(optional_bool(args, key)?.unwrap_or(default))
}

pub fn optional_object(args: &JsonObject, key: &str) -> Result<Option<JsonObject>, ApiError> {
    match present(args, key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(_) => Err(invalid(key, "an object")),
    }
}

pub fn object_or_empty(args: &JsonObject, key: &str) -> Result<JsonObject, ApiError> {
    Ok(optional_object(args, key)?.unwrap_or_default())
}

pub fn optional_list(args: &JsonObject, key: &str) -> Result<Option<Vec<Value>>, ApiError> {
    match present(args, key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.clone())),
        Some(_) => Err(invalid(key, "a list")),
    }
}

pub fn required_list(args: &JsonObject, key: &str) -> Result<Vec<Value>, ApiError> {
    optional_list(args, key)?
        .ok_or_else(|| ApiError::invalid_request(format!("missing required list: '{key}'")))
}

pub fn optional_string_list(args: &JsonObject, key: &str) -> Result<Option<Vec<String>>, ApiError> {
    Ok(optional_list(args, key)?.map(|items| items.iter().map(value_to_text).collect()))
}

pub fn string_list(args: &JsonObject, key: &str) -> Result<Vec<String>, ApiError> {
    Ok(optional_string_list(args, key)?.unwrap_or_default())
}

/// Reads `[{"role": ..., "content": ...}]`.
pub fn turns(args: &JsonObject, key: &str) -> Result<Vec<Turn>, ApiError> {
    required_list(args, key)?
        .iter()
        .map(|item| {
            let role = item
                .get("role")
                .and_then(Value::as_str)
                .and_then(TurnRole::parse)
                .ok_or_else(|| invalid(key, "a list of turns with a valid role"))?;
            let content = item.get("content").map(value_to_text).unwrap_or_default();
            Ok(Turn::new(role, content))
        })
        .collect()
}

/// Accepts a list of byte values or a UTF-8 string.
pub fn bytes(args: &JsonObject, key: &str) -> Result<Vec<u8>, ApiError> {
    match present(args, key) {
        Some(Value::String(text)) => Ok(text.clone().into_bytes()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|byte| u8::try_from(byte).ok())
                    .ok_or_else(|| invalid(key, "a list of bytes"))
            })
            .collect(),
        Some(_) => Err(invalid(key, "bytes")),
        None => Err(ApiError::invalid_request(format!("missing required bytes: '{key}'"))),
    }
}

#[cfg(test)]
mod tests {
    use mtransport::ApiErrorKind;
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn missing_required_argument_is_invalid_request() {
        let args = object(json!({"query": "x"}));
        let error = required_string(&args, "memory_id").expect_err("missing");
        assert_eq!(error.kind, ApiErrorKind::InvalidRequest);
        assert!(error.message.contains("memory_id"));
    }

    #[test]
    fn null_counts_as_absent_and_defaults_apply() {
        let args = object(json!({"limit": null, "rerank": true}));
        assert_eq!(u64_or(&args, "limit", 5).expect("limit"), 5);
        assert!(bool_or(&args, "rerank", false).expect("rerank"));
        assert_eq!(string_or(&args, "sort_by", "relevance").expect("sort"), "relevance");
        assert!(object_or_empty(&args, "filters").expect("filters").is_empty());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let args = object(json!({"limit": "ten", "metadata": [1]}));
        assert!(u64_or(&args, "limit", 5).is_err());
        assert!(optional_object(&args, "metadata").is_err());
    }

    #[test]
    fn turns_and_bytes_parse() {
        let args = object(json!({
            "conversation": [{"role": "user", "content": "hi"}, {"role": "assistant", "content": "yo"}],
            "image_data": [137, 80, 78, 71]
        }));
        assert_eq!(
            turns(&args, "conversation").expect("turns"),
            vec![Turn::user("hi"), Turn::assistant("yo")]
        );
        assert_eq!(bytes(&args, "image_data").expect("bytes"), vec![137, 80, 78, 71]);

        let bad = object(json!({"conversation": [{"role": "robot", "content": "?"}]}));
        assert!(turns(&bad, "conversation").is_err());
    }
}
