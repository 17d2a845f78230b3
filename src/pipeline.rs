//! Analysis pipeline.
//!
//! Fetcher -> Extractor -> {Rule Engine, Scorer} -> result assembly. Each call
//! is independent; the only shared resource is the HTTP client's connection
//! pool, so concurrent analyses never block each other outside the network
//! wait.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Client;

use crate::error_handling::{AnalysisError, InitializationError};
use crate::fetch::fetch_markup;
use crate::initialization::init_client;
use crate::models::{AnalysisResult, StructuralSignals};
use crate::parse::extract_signals;
use crate::rules::evaluate;
use crate::scoring::score;

/// Runs the rule engine and scorer over an extracted signal record.
pub fn analyze_signals(signals: &StructuralSignals) -> AnalysisResult {
    let (insights, actions) = evaluate(signals);
    let score = score(signals);
    debug!("Score {} (improvement {})", score.score, score.improvement);

    AnalysisResult {
        insights,
        actions,
        score: score.score,
        improvement: score.improvement,
    }
}

/// Extracts signals from raw markup and analyzes them.
pub fn analyze_markup(markup: &str) -> AnalysisResult {
    analyze_signals(&extract_signals(markup))
}

/// Fetches `target` and analyzes the returned page.
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` if `target` is blank (no request is made).
/// - `AnalysisError::FetchFailure` if the page cannot be fetched; extraction
///   and evaluation are skipped.
pub async fn analyze_url(client: &Client, target: &str) -> Result<AnalysisResult, AnalysisError> {
    if target.trim().is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    let markup = fetch_markup(client, target).await.inspect_err(|e| {
        warn!("Analysis failed: {}", e);
    })?;

    Ok(analyze_markup(&markup))
}

/// Cloneable handle that owns the HTTP client.
///
/// # Example
///
/// ```no_run
/// use site_insights::Analyzer;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = Analyzer::new()?;
/// let result = analyzer.analyze("example.com").await?;
/// println!("score {} (+{})", result.score, result.improvement);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Analyzer {
    client: Arc<Client>,
}

impl Analyzer {
    /// Builds an analyzer with the fixed fetch policy.
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client()?,
        })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Fetches and analyzes `target`. See [`analyze_url`].
    pub async fn analyze(&self, target: &str) -> Result<AnalysisResult, AnalysisError> {
        analyze_url(&self.client, target).await
    }
}
