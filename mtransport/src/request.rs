//! Transport-neutral description of a single API call.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file sent as a multipart form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: "file".to_string(),
            filename: filename.into(),
            bytes,
        }
    }
}

/// One API call: verb, path relative to the base URL, query pairs and an
/// optional JSON body or file upload.
///
/// ```rust
/// use mtransport::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = ApiRequest::post("search_memories", "memories/search")
///     .with_json(json!({"query": "coffee"}))
///     .with_query("limit", 5);
///
/// assert_eq!(request.method, HttpMethod::Post);
/// assert_eq!(request.query, vec![("limit".to_string(), "5".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub file: Option<FilePart>,
    /// When false, any success status decodes to `null` without reading
    /// the body.
    pub read_body: bool,
}

impl ApiRequest {
    pub fn new(operation: &'static str, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            file: None,
            read_body: true,
        }
    }

    pub fn get(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Get, path)
    }

    pub fn post(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Post, path)
    }

    pub fn put(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Put, path)
    }

    pub fn delete(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Adds the pair only when a value is present.
    pub fn with_optional_query<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_file(mut self, file: FilePart) -> Self {
        self.file = Some(file);
        self
    }

    /// Only the status matters; the response body is never parsed.
    pub fn ignoring_body(mut self) -> Self {
        self.read_body = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn optional_query_skips_absent_values() {
        let request = ApiRequest::get("list_webhooks", "webhooks")
            .with_optional_query("user_id", None::<String>)
            .with_optional_query("platform", Some("slack"));

        assert_eq!(
            request.query,
            vec![("platform".to_string(), "slack".to_string())]
        );
    }

    #[test]
    fn builders_set_method_and_payload() {
        let request = ApiRequest::put("update_memory", "memories/m1").with_json(json!({"content": "x"}));
        assert_eq!(request.method.as_str(), "PUT");
        assert_eq!(request.operation, "update_memory");
        assert_eq!(request.body, Some(json!({"content": "x"})));
        assert!(request.file.is_none());

        let upload = ApiRequest::post("upload_image", "memories/image/upload")
            .with_file(FilePart::new("cat.png", vec![1, 2, 3]));
        assert_eq!(upload.file.as_ref().map(|file| file.field.as_str()), Some("file"));
        assert!(upload.read_body);
        assert!(!ApiRequest::delete("delete_memory", "memories/m1").ignoring_body().read_body);
    }
}
