//! Logging decorator around a [`Transport`]

use crate::config::RequestLoggerConfig;
use crate::format::{decode_response_body, format_debug, format_headers, format_request_data, pretty_json, BANNER};
use crate::sink::{LogSink, TracingSink};
use crate::transport::{ResponseView, Transport};
use ouroboros_http::{CallOptions, HttpMethod};
use std::fmt;
use std::sync::Arc;

/// Logs every request and response passing through a transport.
///
/// Each call logs the request (method, URL, headers, query params, body),
/// performs it through the wrapped transport, logs the response (status,
/// headers, body) and returns the transport's response unchanged. Transport
/// errors are returned as-is.
///
/// The closing `END REQUEST` / `END RESPONSE` banners are written even when
/// the matching phase is disabled. `END REQUEST` is skipped when the
/// transport fails.
///
/// # Example
///
/// ```ignore
/// use ouroboros_http::{CallOptions, HttpClient};
/// use ouroboros_http_log::{RequestLogger, RequestLoggerConfig};
///
/// let logger = RequestLogger::new(
///     HttpClient::default_client()?,
///     RequestLoggerConfig::new().exclude_url("/oauth/token"),
/// );
/// let response = logger
///     .get("https://api.example.com/users", CallOptions::new())
///     .await?;
/// ```
pub struct RequestLogger<T> {
    transport: T,
    sink: Arc<dyn LogSink>,
    config: RequestLoggerConfig,
}

impl<T: Transport> RequestLogger<T> {
    /// Wrap `transport`, logging through a [`TracingSink`]
    pub fn new(transport: T, config: RequestLoggerConfig) -> Self {
        Self::with_sink(transport, Arc::new(TracingSink::default()), config)
    }

    /// Wrap `transport`, logging through `sink`
    pub fn with_sink(transport: T, sink: Arc<dyn LogSink>, config: RequestLoggerConfig) -> Self {
        Self {
            transport,
            sink,
            config,
        }
    }

    /// Log, perform and log a single call
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        options: CallOptions,
    ) -> Result<T::Response, T::Error> {
        if self.config.log_requests {
            self.log_request(method, url, &options);
        }

        let response = self.transport.request(method, url, options).await?;

        self.emit("END REQUEST");
        self.emit(BANNER);

        if self.config.log_responses {
            self.log_response(&response);
        }

        self.emit("END RESPONSE");
        self.emit(BANNER);

        Ok(response)
    }

    pub async fn get(&self, url: &str, options: CallOptions) -> Result<T::Response, T::Error> {
        self.dispatch(HttpMethod::Get, url, options).await
    }

    pub async fn post(&self, url: &str, options: CallOptions) -> Result<T::Response, T::Error> {
        self.dispatch(HttpMethod::Post, url, options).await
    }

    pub async fn patch(&self, url: &str, options: CallOptions) -> Result<T::Response, T::Error> {
        self.dispatch(HttpMethod::Patch, url, options).await
    }

    pub async fn delete(&self, url: &str, options: CallOptions) -> Result<T::Response, T::Error> {
        self.dispatch(HttpMethod::Delete, url, options).await
    }

    pub async fn put(&self, url: &str, options: CallOptions) -> Result<T::Response, T::Error> {
        self.dispatch(HttpMethod::Put, url, options).await
    }

    fn log_request(&self, method: HttpMethod, url: &str, options: &CallOptions) {
        self.emit(BANNER);
        self.emit("START REQUEST");
        self.emit(BANNER);
        self.emit(&format!("Request: {} {}", method, url));

        if let Some(headers) = &options.headers {
            self.emit(&format!("Request headers:\n{}", format_debug(headers)));
        }
        if let Some(params) = &options.params {
            self.emit(&format!("Request params:\n{}", format_debug(params)));
        }
        if let Some(json) = &options.json {
            self.emit(&format!("Request JSON:\n{}", pretty_json(json)));
        }
        if let Some(data) = &options.data {
            self.emit(&format!("Request data:\n{}", format_request_data(data)));
        }
    }

    fn log_response(&self, response: &T::Response) {
        self.emit(BANNER);
        self.emit("START RESPONSE");
        self.emit(BANNER);
        self.emit(&format!("Response status code: {}", response.status_code()));

        if self.config.is_excluded(response.url()) {
            return;
        }

        self.emit(&format!(
            "Response headers:\n{}",
            format_headers(response.headers())
        ));
        self.emit(&format!(
            "Response content:\n{}",
            decode_response_body(response).render()
        ));
    }

    fn emit(&self, line: &str) {
        self.sink.log(self.config.level.into(), line);
    }
}

impl<T: Clone> Clone for RequestLogger<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            sink: Arc::clone(&self.sink),
            config: self.config.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RequestLogger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestLogger")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .finish()
    }
}
