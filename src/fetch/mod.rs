//! Page fetching.
//!
//! Issues a single GET for the normalized target and returns the body text.
//! Timeout and client identity come from the shared `reqwest::Client` (see
//! `initialization::init_client`); redirects are followed with reqwest's
//! default policy. Only a final 2xx response yields a body. There are no
//! retries.

use log::{debug, info};
use reqwest::Client;

use crate::app::normalize_target;
use crate::error_handling::AnalysisError;

/// Fetches raw markup for `target`.
///
/// A target without a scheme is fetched over `https://`.
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` if `target` is blank.
/// - `AnalysisError::FetchFailure` for invalid URLs, DNS/connect failures,
///   timeouts, non-2xx statuses and unreadable bodies.
pub async fn fetch_markup(client: &Client, target: &str) -> Result<String, AnalysisError> {
    let url = normalize_target(target)?;
    info!("Scanning: {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| AnalysisError::from_reqwest(url.as_str(), &e))?;

    if !response.status().is_success() {
        return Err(AnalysisError::from_status(url.as_str(), response.status()));
    }

    debug!(
        "Received {} from {} (final URL {})",
        response.status(),
        url,
        response.url()
    );

    response
        .text()
        .await
        .map_err(|e| AnalysisError::from_reqwest(url.as_str(), &e))
}
