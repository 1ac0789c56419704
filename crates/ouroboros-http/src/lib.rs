//! ouroboros-http: async HTTP client
//!
//! The transport used by `ouroboros-http-log`. Takes a method, a URL and a
//! bag of [`CallOptions`], and returns a fully-buffered [`HttpResponse`].
//!
//! # Architecture
//!
//! - `HttpClient`: connection-pooled async client over reqwest
//! - `CallOptions`: headers, query params, JSON or raw body, timeout
//! - `HttpResponse`: buffered response with latency measurement

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, RedirectPolicy};
pub use error::{HttpError, HttpResult};
pub use request::{CallOptions, HttpMethod, RequestData};
pub use response::{HttpResponse, HttpResponseBuilder};
