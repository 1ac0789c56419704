//! Body formatting for log output
//!
//! Bodies that look like JSON are pretty-printed with four-space
//! indentation. Anything that fails to decode is logged as-is: decoding is
//! an explicit [`JsonBody`] outcome, never an error.

use crate::transport::ResponseView;
use ouroboros_http::RequestData;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

/// Separator line around phase titles
pub const BANNER: &str = "==================================================";

/// Result of trying to read a body as JSON
#[derive(Debug, Clone, PartialEq)]
pub enum JsonBody {
    /// Decoded structure
    Parsed(Value),
    /// Body that is not JSON, kept verbatim
    Raw(String),
}

impl JsonBody {
    /// Decode `text` as JSON, keeping the original text on failure
    pub fn decode(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => JsonBody::Parsed(value),
            Err(e) => {
                tracing::debug!(error = %e, "body is not JSON, logging raw text");
                JsonBody::Raw(text.to_string())
            }
        }
    }

    /// Text for the log line
    pub fn render(&self) -> String {
        match self {
            JsonBody::Parsed(value) => pretty_json(value),
            JsonBody::Raw(text) => text.clone(),
        }
    }
}

/// Pretty-print with four-space indentation
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => format!("<unserializable: {}>", e),
    }
}

/// Render a request's raw `data` payload
pub fn format_request_data(data: &RequestData) -> String {
    match data {
        RequestData::Form(form) => pretty_json(form),
        RequestData::Text(text) => JsonBody::decode(text).render(),
        RequestData::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Decode a response body according to its `Content-Type`
pub fn decode_response_body<R: ResponseView + ?Sized>(response: &R) -> JsonBody {
    if !response.is_json() {
        return JsonBody::Raw(response.text().into_owned());
    }

    match response.json() {
        Ok(value) => JsonBody::Parsed(value),
        Err(e) => {
            tracing::debug!(error = %e, "response declared JSON but did not decode");
            JsonBody::Raw(response.text().into_owned())
        }
    }
}

/// Header map in its debug form, with keys sorted
pub fn format_headers(headers: &HashMap<String, String>) -> String {
    let sorted: BTreeMap<&str, &str> = headers
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    format!("{:?}", sorted)
}

/// Any value in its debug form
pub fn format_debug<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouroboros_http::HttpResponseBuilder;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        assert_eq!(pretty_json(&json!({"a": 1})), "{\n    \"a\": 1\n}");
        assert_eq!(
            pretty_json(&json!({"a": [1, 2]})),
            "{\n    \"a\": [\n        1,\n        2\n    ]\n}"
        );
    }

    #[test]
    fn test_pretty_json_preserves_key_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
        assert_eq!(pretty_json(&value), "{\n    \"z\": 1,\n    \"a\": 2\n}");
    }

    #[test]
    fn test_decode_valid_json() {
        let body = JsonBody::decode(r#"{"a": 1}"#);
        assert_eq!(body, JsonBody::Parsed(json!({"a": 1})));
        assert_eq!(body.render(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_decode_invalid_json_keeps_text() {
        let body = JsonBody::decode("not json");
        assert!(matches!(body, JsonBody::Raw(_)));
        assert_eq!(body.render(), "not json");
    }

    #[test]
    fn test_request_data_text() {
        assert_eq!(
            format_request_data(&RequestData::from(r#"{"a": 1}"#)),
            "{\n    \"a\": 1\n}"
        );
        assert_eq!(format_request_data(&RequestData::from("not json")), "not json");
    }

    #[test]
    fn test_request_data_form() {
        let mut form = BTreeMap::new();
        form.insert("user".to_string(), "alice".to_string());
        assert_eq!(
            format_request_data(&RequestData::Form(form)),
            "{\n    \"user\": \"alice\"\n}"
        );
    }

    #[test]
    fn test_request_data_bytes() {
        assert_eq!(
            format_request_data(&RequestData::from(b"raw\xffbytes".to_vec())),
            "raw\u{fffd}bytes"
        );
    }

    #[test]
    fn test_response_json_body() {
        let response = HttpResponseBuilder::new()
            .header("Content-Type", "application/json; charset=utf-8")
            .body(r#"{"ok":true}"#)
            .build();

        assert_eq!(
            decode_response_body(&response),
            JsonBody::Parsed(json!({"ok": true}))
        );
    }

    #[test]
    fn test_response_bad_json_falls_back_to_text() {
        let response = HttpResponseBuilder::new()
            .header("Content-Type", "application/json")
            .body("{truncated")
            .build();

        assert_eq!(
            decode_response_body(&response),
            JsonBody::Raw("{truncated".to_string())
        );
    }

    #[test]
    fn test_response_non_json_is_not_decoded() {
        let response = HttpResponseBuilder::new()
            .header("Content-Type", "text/plain")
            .body(r#"{"a": 1}"#)
            .build();

        assert_eq!(
            decode_response_body(&response),
            JsonBody::Raw(r#"{"a": 1}"#.to_string())
        );
    }

    #[test]
    fn test_format_headers_sorted() {
        let mut headers = HashMap::new();
        headers.insert("x-b".to_string(), "2".to_string());
        headers.insert("x-a".to_string(), "1".to_string());

        assert_eq!(format_headers(&headers), r#"{"x-a": "1", "x-b": "2"}"#);
    }
}
