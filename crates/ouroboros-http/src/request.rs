//! Request vocabulary: HTTP methods and the per-call options bag

use bytes::Bytes;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use crate::error::{HttpError, HttpResult};

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Returns the method as an upper-case string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Raw request body payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestData {
    /// Key/value mapping, sent form-encoded
    Form(BTreeMap<String, String>),
    /// Text body, sent as-is
    Text(String),
    /// Arbitrary bytes, sent as-is
    Bytes(Bytes),
}

impl From<&str> for RequestData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RequestData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for RequestData {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(bytes))
    }
}

impl From<Bytes> for RequestData {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<BTreeMap<String, String>> for RequestData {
    fn from(form: BTreeMap<String, String>) -> Self {
        Self::Form(form)
    }
}

impl From<HashMap<String, String>> for RequestData {
    fn from(form: HashMap<String, String>) -> Self {
        Self::Form(form.into_iter().collect())
    }
}

/// Named options for a single call.
///
/// Every field is optional; a field that is `Some` counts as present even
/// when it is empty. The transport consumes the options as given.
///
/// ```ignore
/// let options = CallOptions::new()
///     .header("Accept", "application/json")
///     .query("page", "2")
///     .json_value(serde_json::json!({"name": "Alice"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Request headers
    pub headers: Option<BTreeMap<String, String>>,

    /// Query parameters, in order
    pub params: Option<Vec<(String, String)>>,

    /// Structured JSON body
    pub json: Option<serde_json::Value>,

    /// Raw body payload
    pub data: Option<RequestData>,

    /// Per-request timeout, overriding the client default
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace the header map
    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Append a query parameter
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Set a JSON body from an already-built value
    pub fn json_value(mut self, value: serde_json::Value) -> Self {
        self.json = Some(value);
        self
    }

    /// Set a JSON body from any serializable type
    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> HttpResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| HttpError::Json(format!("Failed to serialize body: {}", e)))?;
        Ok(self.json_value(value))
    }

    /// Set a raw body payload
    pub fn data(mut self, data: impl Into<RequestData>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Apply these options to a reqwest builder
    pub(crate) fn apply(self, mut builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(headers) = self.headers {
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
        }
        if let Some(params) = self.params {
            builder = builder.query(&params);
        }
        // A raw body wins over JSON, so the Content-Type matches what is sent
        if let (Some(json), None) = (&self.json, &self.data) {
            builder = builder.json(json);
        }
        builder = match self.data {
            Some(RequestData::Form(form)) => builder.form(&form),
            Some(RequestData::Text(text)) => builder.body(text),
            Some(RequestData::Bytes(bytes)) => builder.body(bytes),
            None => builder,
        };
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}
