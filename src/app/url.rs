//! Target identifier validation and normalization.

use url::Url;

use crate::config::DEFAULT_SCHEME_PREFIX;
use crate::error_handling::{AnalysisError, FetchErrorKind};

/// Returns true if `target` already starts with `http://` or `https://`
/// (ASCII case-insensitive).
pub fn has_supported_scheme(target: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        target
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Normalizes a target identifier into an absolute URL.
///
/// Trims whitespace and adds `https://` if no scheme is present, then parses
/// the result.
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` if the target is empty after trimming.
/// - `AnalysisError::FetchFailure` with `FetchErrorKind::InvalidTarget` if the
///   normalized string is not a valid URL; such a target can never be fetched.
pub fn normalize_target(target: &str) -> Result<Url, AnalysisError> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    let normalized = if has_supported_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    Url::parse(&normalized).map_err(|e| {
        log::warn!("Rejecting invalid URL '{}': {}", trimmed, e);
        AnalysisError::FetchFailure {
            url: normalized.clone(),
            kind: FetchErrorKind::InvalidTarget,
            reason: format!("invalid URL: {e}"),
            status: None,
        }
    })
}
