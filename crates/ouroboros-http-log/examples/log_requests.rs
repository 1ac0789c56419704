//! Log a couple of calls to stdout through tracing
//!
//! ```text
//! cargo run -p ouroboros-http-log --example log_requests -- https://httpbin.org
//! ```

use ouroboros_http::{HttpClient, HttpClientConfig};
use ouroboros_http_log::{CallOptions, RequestLogger, RequestLoggerConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org".to_string());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = HttpClient::new(HttpClientConfig::new().base_url(base_url))?;
    let logger = RequestLogger::new(client, RequestLoggerConfig::new().exclude_url("/headers"));

    logger
        .get("/get", CallOptions::new().query("page", "1"))
        .await?;

    logger
        .post(
            "/post",
            CallOptions::new().json_value(serde_json::json!({"name": "Alice", "tags": ["a", "b"]})),
        )
        .await?;

    // Status only: the URL matches an exclusion
    logger.get("/headers", CallOptions::new()).await?;

    Ok(())
}
