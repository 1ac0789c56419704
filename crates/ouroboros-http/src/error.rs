//! HTTP error types and handling

use thiserror::Error;

/// HTTP-specific errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection failed (DNS, TCP, TLS)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Invalid request configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// URL could not be resolved to an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// Response body could not be read
    #[error("Body error: {0}")]
    Body(String),

    /// Any other reqwest error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parse error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type for HTTP operations
pub type HttpResult<T> = Result<T, HttpError>;

impl HttpError {
    /// Map a reqwest failure onto the transport's own variants.
    ///
    /// Timeouts and connect failures get dedicated variants; body errors keep
    /// their message; everything else stays wrapped.
    pub(crate) fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(err.to_string())
        } else {
            HttpError::Reqwest(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_parse_conversion() {
        let err: HttpError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, HttpError::UrlParse(_)));
        assert!(err.to_string().starts_with("URL parse error"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            HttpError::Timeout("deadline elapsed".into()).to_string(),
            "Request timeout: deadline elapsed"
        );
        assert_eq!(
            HttpError::InvalidUrl("/users".into()).to_string(),
            "Invalid URL: /users"
        );
    }
}
