//! site_insights library: single-page structural analysis
//!
//! Fetches one web page, extracts a fixed set of structural signals from its
//! markup, and evaluates a deterministic rule set against them to produce
//! categorized insights (seo, ppc, creative, tech), one recommended action per
//! category, and a health score with a capped improvement delta.
//!
//! # Example
//!
//! ```no_run
//! use site_insights::{Analyzer, Category};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new()?;
//! let result = analyzer.analyze("example.com").await?;
//! println!("score: {}", result.score);
//! println!("seo: {:?}", result.primary_insight(Category::Seo));
//! # Ok(())
//! # }
//! ```
//!
//! Offline analysis of markup you already have:
//!
//! ```
//! let result = site_insights::analyze_markup("<html></html>");
//! assert_eq!(result.score, 45);
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. `analyze_markup` and `analyze_signals`
//! are synchronous.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
mod fetch;
pub mod initialization;
pub mod models;
mod parse;
mod pipeline;
pub mod rules;
mod scoring;
pub mod server;
mod utils;

// Re-export public API
pub use app::normalize_target;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, ErrorPayload, FetchErrorKind};
pub use fetch::fetch_markup;
pub use models::{ActionSet, AnalysisResult, Category, InsightSet, StructuralSignals};
pub use parse::{extract_signals, extract_signals_from_document};
pub use pipeline::{analyze_markup, analyze_signals, analyze_url, Analyzer};
pub use scoring::{score, Score};
