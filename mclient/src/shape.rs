//! Response reshaping shared by the facade operations.

use mcommon::JsonObject;
use mtransport::ApiError;
use serde_json::Value;

/// `null` becomes an empty object; any other non-object is a protocol error.
pub fn expect_object(operation: &str, value: Value) -> Result<JsonObject, ApiError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonObject::new()),
        other => Err(ApiError::protocol(format!(
            "{operation}: expected a JSON object, got {}",
            kind_name(&other)
        ))),
    }
}

/// `null` becomes an empty list; any other non-array is a protocol error.
pub fn expect_list(operation: &str, value: Value) -> Result<Vec<Value>, ApiError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ApiError::protocol(format!(
            "{operation}: expected a JSON array, got {}",
            kind_name(&other)
        ))),
    }
}

/// Accepts `{"logs": [...]}` or a bare list; anything else is empty.
pub fn unwrap_logs(value: Value) -> Vec<Value> {
    match value {
        Value::Object(mut map) => match map.remove("logs") {
            Some(Value::Array(logs)) => logs,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use mtransport::ApiErrorKind;
    use serde_json::json;

    use super::*;

    #[test]
    fn object_and_list_accept_null() {
        assert!(expect_object("get_memory", Value::Null).expect("null ok").is_empty());
        assert!(expect_list("search_memories", Value::Null).expect("null ok").is_empty());
    }

    #[test]
    fn wrong_shape_is_protocol_error() {
        let error = expect_object("get_memory", json!([1])).expect_err("array is not object");
        assert_eq!(error.kind, ApiErrorKind::Protocol);
        assert!(error.message.contains("get_memory"));

        let error = expect_list("search_memories", json!({"a": 1})).expect_err("object");
        assert_eq!(error.kind, ApiErrorKind::Protocol);
    }

    #[test]
    fn audit_logs_envelope_is_unwrapped() {
        assert_eq!(unwrap_logs(json!({"logs": [{"id": 1}]})), vec![json!({"id": 1})]);
        assert_eq!(unwrap_logs(json!([{"id": 2}])), vec![json!({"id": 2})]);
        assert!(unwrap_logs(json!({"total": 0})).is_empty());
        assert!(unwrap_logs(json!("nope")).is_empty());
    }
}
