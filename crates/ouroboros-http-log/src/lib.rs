//! ouroboros-http-log: request/response logging for HTTP clients
//!
//! Wraps a [`Transport`] and writes a human-readable trace of every call to
//! a [`LogSink`]: method, URL, headers, query params and body on the way
//! out; status, headers and body on the way back. Responses and errors are
//! returned exactly as the transport produced them.
//!
//! # Architecture
//!
//! - `RequestLogger`: the decorator, with `dispatch` and one method per verb
//! - `RequestLoggerConfig`: level, URL exclusions, per-phase switches
//! - `LogSink`: where lines go (`TracingSink` by default, `MemorySink` for capture)
//! - `format`: JSON pretty-printing and the raw-text fallback
//!
//! `ouroboros_http::HttpClient` implements [`Transport`] out of the box.

pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod sink;
pub mod transport;

pub use config::{LogLevel, RequestLoggerConfig};
pub use error::LogConfigError;
pub use format::JsonBody;
pub use logger::RequestLogger;
pub use sink::{LogSink, MemorySink, TracingSink};
pub use transport::{ResponseView, Transport};

// Re-export the request vocabulary so callers need only this crate
pub use ouroboros_http::{CallOptions, HttpMethod, RequestData};
