//! Request handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error_handling::AnalysisError;
use crate::pipeline::Analyzer;

/// Query string of `/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    /// Target identifier; missing and blank are both rejected.
    pub url: Option<String>,
}

fn error_status(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::InvalidInput => StatusCode::BAD_REQUEST,
        AnalysisError::FetchFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Runs one analysis per request.
pub async fn analyze_handler(
    State(analyzer): State<Analyzer>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let target = params.url.unwrap_or_default();

    match analyzer.analyze(&target).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => (error_status(&error), Json(error.to_payload())).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FetchErrorKind;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            error_status(&AnalysisError::InvalidInput),
            StatusCode::BAD_REQUEST
        );
        let failure = AnalysisError::FetchFailure {
            url: "https://example.invalid/".to_string(),
            kind: FetchErrorKind::Connect,
            reason: "dns error".to_string(),
            status: None,
        };
        assert_eq!(error_status(&failure), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
