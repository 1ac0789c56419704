//! HTTP client configuration

use std::collections::BTreeMap;
use std::time::Duration;

/// How the client treats 3xx responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow up to `max` redirects
    Follow { max: usize },
    /// Return 3xx responses as-is
    None,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        RedirectPolicy::Follow { max: 10 }
    }
}

impl RedirectPolicy {
    pub(crate) fn to_reqwest(self) -> reqwest::redirect::Policy {
        match self {
            RedirectPolicy::Follow { max } => reqwest::redirect::Policy::limited(max),
            RedirectPolicy::None => reqwest::redirect::Policy::none(),
        }
    }
}

/// Configuration for [`HttpClient`](crate::HttpClient)
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that relative request URLs are joined onto
    pub base_url: Option<String>,

    /// Total request timeout
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Idle connection timeout
    pub pool_idle_timeout: Duration,

    pub redirect: RedirectPolicy,

    /// User-Agent header value
    pub user_agent: String,

    /// Headers sent with every request
    pub default_headers: BTreeMap<String, String>,

    pub gzip: bool,

    pub brotli: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(90),
            redirect: RedirectPolicy::default(),
            user_agent: format!("ouroboros-http/{}", env!("CARGO_PKG_VERSION")),
            default_headers: BTreeMap::new(),
            gzip: true,
            brotli: true,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the total timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set the redirect policy
    pub fn redirect(mut self, policy: RedirectPolicy) -> Self {
        self.redirect = policy;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Enable/disable gzip decompression
    pub fn gzip(mut self, enabled: bool) -> Self {
        self.gzip = enabled;
        self
    }

    /// Enable/disable brotli decompression
    pub fn brotli(mut self, enabled: bool) -> Self {
        self.brotli = enabled;
        self
    }
}
