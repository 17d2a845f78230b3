//! Error type definitions.

use log::SetLoggerError;
use reqwest::{Error as ReqwestError, StatusCode};
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Message reported when the caller supplies no target.
pub const INVALID_INPUT_MESSAGE: &str = "URL is required";

/// Message reported when the target could not be fetched.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to analyze URL. Ensure it is reachable.";

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Class of a failed page fetch.
///
/// Derived from the transport error so logs and callers can tell a slow origin
/// from a refused connection or an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// The target could not be turned into a request (bad URL, bad header).
    InvalidTarget,
    /// The request did not complete within the timeout.
    Timeout,
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// The origin answered with a non-success status.
    Status,
    /// The redirect chain could not be followed.
    Redirect,
    /// The response body could not be read.
    Body,
    /// The response body could not be decoded as text.
    Decode,
    /// Any other transport failure.
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    /// Short label used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidTarget => "invalid target",
            FetchErrorKind::Timeout => "request timeout",
            FetchErrorKind::Connect => "connection error",
            FetchErrorKind::Status => "error status",
            FetchErrorKind::Redirect => "redirect error",
            FetchErrorKind::Body => "body read error",
            FetchErrorKind::Decode => "decode error",
            FetchErrorKind::Other => "request error",
        }
    }
}

/// Errors surfaced by the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The target identifier was missing or blank. Raised before any network activity.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// The target was unreachable: transport failure, timeout, DNS failure or
    /// a non-success status.
    #[error("unreachable target {url} ({kind}): {reason}")]
    FetchFailure {
        /// Normalized URL that was requested
        url: String,
        /// Failure class
        kind: FetchErrorKind,
        /// Underlying reason reported by the transport
        reason: String,
        /// HTTP status, when the origin answered
        status: Option<u16>,
    },
}

impl AnalysisError {
    /// Builds a fetch failure from a transport error.
    pub fn from_reqwest(url: &str, error: &ReqwestError) -> Self {
        AnalysisError::FetchFailure {
            url: url.to_string(),
            kind: super::categorize_reqwest_error(error),
            reason: super::describe_error_chain(error),
            status: error.status().map(|s| s.as_u16()),
        }
    }

    /// Builds a fetch failure for a final response outside the 2xx range.
    pub fn from_status(url: &str, status: StatusCode) -> Self {
        AnalysisError::FetchFailure {
            url: url.to_string(),
            kind: FetchErrorKind::Status,
            reason: format!("HTTP status {} for url ({})", status, url),
            status: Some(status.as_u16()),
        }
    }

    /// Converts the error into the externally visible payload.
    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            AnalysisError::InvalidInput => ErrorPayload {
                error: INVALID_INPUT_MESSAGE.to_string(),
                details: None,
            },
            AnalysisError::FetchFailure { reason, .. } => ErrorPayload {
                error: FETCH_FAILURE_MESSAGE.to_string(),
                details: Some(reason.clone()),
            },
        }
    }
}

/// Error payload returned to callers: `{ error, details? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    /// User-facing message
    pub error: String,
    /// Underlying reason, omitted for invalid input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AnalysisError> for ErrorPayload {
    fn from(error: &AnalysisError) -> Self {
        error.to_payload()
    }
}
