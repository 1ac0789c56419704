//! Request logger configuration

use crate::error::LogConfigError;
use serde::Deserialize;

/// Severity applied to every line the logger emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// What the request logger records.
///
/// Deserializes with defaults for missing fields, so an empty JSON object is
/// a valid config:
///
/// ```ignore
/// let config = RequestLoggerConfig::from_json(r#"{"level": "debug", "excluded_url_substrings": ["/auth"]}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestLoggerConfig {
    /// Level for every emitted line
    pub level: LogLevel,

    /// Responses whose URL contains any of these keep only their status line
    pub excluded_url_substrings: Vec<String>,

    /// Log the request phase
    pub log_requests: bool,

    /// Log the response phase
    pub log_responses: bool,
}

impl Default for RequestLoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            excluded_url_substrings: Vec::new(),
            log_requests: true,
            log_responses: true,
        }
    }
}

impl RequestLoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, LogConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the level for every emitted line
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Suppress response headers and body for URLs containing `substring`
    pub fn exclude_url(mut self, substring: impl Into<String>) -> Self {
        self.excluded_url_substrings.push(substring.into());
        self
    }

    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    pub fn log_responses(mut self, enabled: bool) -> Self {
        self.log_responses = enabled;
        self
    }

    /// Returns true if responses from `url` should omit headers and body
    pub fn is_excluded(&self, url: &str) -> bool {
        self.excluded_url_substrings
            .iter()
            .any(|substring| url.contains(substring.as_str()))
    }
}
