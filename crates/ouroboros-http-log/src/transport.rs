//! Capabilities the logger needs from an HTTP client

use async_trait::async_trait;
use ouroboros_http::{CallOptions, HttpClient, HttpError, HttpMethod, HttpResponse};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Read-only view of a response, enough to log it
pub trait ResponseView {
    /// Error returned when the body is not valid JSON
    type JsonError: fmt::Display;

    fn status_code(&self) -> u16;

    /// Final URL of the response
    fn url(&self) -> &str;

    fn headers(&self) -> &HashMap<String, String>;

    /// Whether `Content-Type` declares a JSON body
    fn is_json(&self) -> bool;

    /// Body decoded as JSON
    fn json(&self) -> Result<serde_json::Value, Self::JsonError>;

    /// Body as text
    fn text(&self) -> Cow<'_, str>;
}

/// Something that performs HTTP calls.
///
/// Responses and errors are the transport's own types; the logger hands them
/// back to its caller untouched.
#[async_trait]
pub trait Transport: Send + Sync {
    type Response: ResponseView + Send;
    type Error: Send;

    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        options: CallOptions,
    ) -> Result<Self::Response, Self::Error>;
}

impl ResponseView for HttpResponse {
    type JsonError = HttpError;

    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn is_json(&self) -> bool {
        HttpResponse::is_json(self)
    }

    fn json(&self) -> Result<serde_json::Value, HttpError> {
        HttpResponse::json(self)
    }

    fn text(&self) -> Cow<'_, str> {
        HttpResponse::text(self)
    }
}

#[async_trait]
impl Transport for HttpClient {
    type Response = HttpResponse;
    type Error = HttpError;

    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        options: CallOptions,
    ) -> Result<HttpResponse, HttpError> {
        HttpClient::request(self, method, url, options).await
    }
}
