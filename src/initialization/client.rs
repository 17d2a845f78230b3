//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DEFAULT_USER_AGENT, REQUEST_TIMEOUT_SECS};
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for page fetches.
///
/// The client sends `DEFAULT_USER_AGENT`, gives up on a request after
/// `REQUEST_TIMEOUT_SECS` and follows redirects with reqwest's default policy.
/// It owns the connection pool and is shared by all in-flight analyses.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    build_client(Duration::from_secs(REQUEST_TIMEOUT_SECS))
}

pub(crate) fn build_client(timeout: Duration) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
