//! HTTP wiring for browser front ends.
//!
//! One endpoint:
//! - `GET /analyze?url=<target>` - runs the pipeline and returns the success
//!   payload (200) or the error payload (400 for a missing target, 500 for an
//!   unreachable one)
//!
//! Cross-origin requests are allowed so a static front end served from
//! another origin can call it.

mod handlers;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline::Analyzer;
use handlers::analyze_handler;

/// Builds the router with the analyzer as shared state.
pub fn router(analyzer: Analyzer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/analyze", get(analyze_handler))
        .layer(cors)
        .with_state(analyzer)
}

/// Serves the router on an already bound listener.
pub async fn serve(listener: TcpListener, analyzer: Analyzer) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(analyzer))
        .await
        .map_err(|e| anyhow::anyhow!("Analysis server error: {}", e))
}

/// Binds `127.0.0.1:<port>` and serves until the process exits.
pub async fn start_server(port: u16, analyzer: Analyzer) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind analysis server to port {}: {}", port, e))?;

    log::info!("Analysis server listening on http://127.0.0.1:{}/", port);
    log::info!("  - Analyze: http://127.0.0.1:{}/analyze?url=<target>", port);

    serve(listener, analyzer).await
}
