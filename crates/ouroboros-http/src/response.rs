//! HTTP response types

use crate::error::{HttpError, HttpResult};
use std::borrow::Cow;
use std::collections::HashMap;

/// Fully-buffered HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers, names lower-cased
    pub headers: HashMap<String, String>,

    /// Response body as bytes
    pub body: Vec<u8>,

    /// Final URL (may differ from request URL due to redirects)
    pub url: String,

    /// Request latency in milliseconds
    pub latency_ms: u64,

    /// HTTP version
    pub version: String,
}

impl HttpResponse {
    /// Body as text; invalid UTF-8 sequences are replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Body as JSON
    pub fn json(&self) -> HttpResult<serde_json::Value> {
        serde_json::from_slice(&self.body)
            .map_err(|e| HttpError::Json(format!("Failed to parse JSON: {}", e)))
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Check if content type is JSON
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}

/// Builder for [`HttpResponse`], used by adapters and tests
#[derive(Debug)]
pub struct HttpResponseBuilder {
    response: HttpResponse,
}

impl HttpResponseBuilder {
    pub fn new() -> Self {
        Self {
            response: HttpResponse {
                status_code: 200,
                headers: HashMap::new(),
                body: Vec::new(),
                url: String::new(),
                latency_ms: 0,
                version: "HTTP/1.1".to_string(),
            },
        }
    }

    pub fn status_code(mut self, code: u16) -> Self {
        self.response.status_code = code;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response
            .headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.response.body = body.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.response.url = url.into();
        self
    }

    pub fn build(self) -> HttpResponse {
        self.response
    }
}

impl Default for HttpResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffer a reqwest response into an [`HttpResponse`]
pub(crate) async fn from_reqwest(
    response: reqwest::Response,
    latency_ms: u64,
) -> HttpResult<HttpResponse> {
    let status_code = response.status().as_u16();
    let url = response.url().to_string();
    let version = format!("{:?}", response.version());

    // Repeated headers are joined the way they would be on a single line
    let mut headers: HashMap<String, String> = HashMap::new();
    for (name, value) in response.headers().iter() {
        let Ok(value) = value.to_str() else {
            tracing::debug!(header = %name, "skipping non-ASCII response header");
            continue;
        };
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    let body = response.bytes().await.map_err(HttpError::classify)?.to_vec();

    Ok(HttpResponse {
        status_code,
        headers,
        body,
        url,
        latency_ms,
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json() {
        let response = HttpResponseBuilder::new()
            .body(r#"{"name": "Alice", "age": 30}"#)
            .build();

        let json = response.json().unwrap();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn test_response_json_error() {
        let response = HttpResponseBuilder::new().body("<html>").build();
        assert!(matches!(response.json(), Err(HttpError::Json(_))));
        assert_eq!(response.text(), "<html>");
    }

    #[test]
    fn test_text_is_lossy() {
        let response = HttpResponseBuilder::new().body(vec![b'o', b'k', 0xff]).build();
        assert_eq!(response.text(), "ok\u{fffd}");
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let response = HttpResponseBuilder::new()
            .header("Content-Type", "application/json")
            .build();

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_response_is_json() {
        let response = HttpResponseBuilder::new()
            .header("Content-Type", "application/json; charset=utf-8")
            .build();
        assert!(response.is_json());

        let response = HttpResponseBuilder::new()
            .header("Content-Type", "text/html")
            .build();
        assert!(!response.is_json());
    }
}
