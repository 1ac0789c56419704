//! HTTP client with connection pooling and async operations

use crate::config::HttpClientConfig;
use crate::error::{HttpError, HttpResult};
use crate::request::{CallOptions, HttpMethod};
use crate::response::{from_reqwest, HttpResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Async HTTP client with connection pooling
///
/// # Example
///
/// ```ignore
/// use ouroboros_http::{CallOptions, HttpClient, HttpClientConfig, HttpMethod};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpClient::new(HttpClientConfig::new().base_url("https://api.example.com"))?;
///
///     let response = client
///         .request(HttpMethod::Get, "/users/1", CallOptions::new())
///         .await?;
///     println!("Status: {}, Latency: {}ms", response.status_code, response.latency_ms);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

struct HttpClientInner {
    client: reqwest::Client,
    base_url: Option<Url>,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpClientConfig) -> HttpResult<Self> {
        let base_url = config.base_url.as_deref().map(Url::parse).transpose()?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| HttpError::InvalidRequest(format!("header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HttpError::InvalidRequest(format!("header value for {}: {}", name, e)))?;
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .user_agent(&config.user_agent)
            .default_headers(default_headers)
            .redirect(config.redirect.to_reqwest())
            .gzip(config.gzip)
            .brotli(config.brotli)
            .build()?;

        Ok(Self {
            inner: Arc::new(HttpClientInner {
                client,
                base_url,
                config,
            }),
        })
    }

    /// Create a client with default configuration
    pub fn default_client() -> HttpResult<Self> {
        Self::new(HttpClientConfig::default())
    }

    /// Resolve `url` against the base URL.
    ///
    /// Absolute URLs win over the base URL.
    pub fn resolve_url(&self, url: &str) -> HttpResult<Url> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.inner.base_url {
                Some(base) => Ok(base.join(url)?),
                None => Err(HttpError::InvalidUrl(format!(
                    "relative URL {:?} without a base URL",
                    url
                ))),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Send a request and buffer the full response.
    ///
    /// Any status code is a successful response; only transport failures
    /// are errors.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        options: CallOptions,
    ) -> HttpResult<HttpResponse> {
        let url = self.resolve_url(url)?;
        tracing::debug!(%method, %url, "sending request");

        let builder = options.apply(self.inner.client.request(method.into(), url));

        let start = Instant::now();
        let response = builder.send().await.map_err(HttpError::classify)?;
        let latency_ms = start.elapsed().as_millis() as u64;

        from_reqwest(response, latency_ms).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.inner.config.base_url)
            .field("timeout", &self.inner.config.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = HttpClientConfig::new().base_url("https://api.example.com");

        let client = HttpClient::new(config).unwrap();
        assert_eq!(
            client.resolve_url("/users/1").unwrap().as_str(),
            "https://api.example.com/users/1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpClient::new(HttpClientConfig::new().base_url("not a url")).unwrap_err();
        assert!(matches!(err, HttpError::UrlParse(_)));
    }

    #[test]
    fn test_invalid_default_header() {
        let config = HttpClientConfig::new().default_header("bad header", "x");
        assert!(matches!(
            HttpClient::new(config),
            Err(HttpError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_resolve_url() {
        let client =
            HttpClient::new(HttpClientConfig::new().base_url("https://api.example.com/v1/")).unwrap();

        assert_eq!(
            client.resolve_url("users/1").unwrap().as_str(),
            "https://api.example.com/v1/users/1"
        );
        assert_eq!(
            client.resolve_url("https://other.example.com/x").unwrap().as_str(),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_relative_url_without_base() {
        let client = HttpClient::default_client().unwrap();
        assert!(matches!(
            client.resolve_url("/users"),
            Err(HttpError::InvalidUrl(_))
        ));
    }
}
