//! Error types for logger configuration

use thiserror::Error;

/// Errors raised while building a [`RequestLoggerConfig`](crate::RequestLoggerConfig)
#[derive(Error, Debug)]
pub enum LogConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
