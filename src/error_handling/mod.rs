//! Error types and transport error categorization.
//!
//! This module provides:
//! - Library error types (`AnalysisError`, `InitializationError`)
//! - Categorization of `reqwest` failures into `FetchErrorKind`
//! - The externally visible error payload (`ErrorPayload`)
//!
//! Extraction, rule evaluation and scoring are total functions, so the only
//! runtime failures are a missing target and an unreachable one.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_error_chain};
pub use types::{
    AnalysisError, ErrorPayload, FetchErrorKind, InitializationError, FETCH_FAILURE_MESSAGE,
    INVALID_INPUT_MESSAGE,
};
