//! Tests for the `/analyze` HTTP endpoint.
//!
//! The router is served on an ephemeral local port and driven with reqwest;
//! target pages come from an `httptest` mock server.

mod helpers;

use helpers::{closed_port_url, default_analyzer, serve_page};
use serde_json::Value;
use site_insights::server::serve;

/// Starts the analysis server in the background and returns its base URL.
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Listener should have an address");
    tokio::spawn(serve(listener, default_analyzer()));
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_analyze_endpoint_returns_success_payload() {
    let page = serve_page(
        "/",
        r#"<html><head><title>Acme Software</title></head><body><h1>Hi</h1></body></html>"#,
    );
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/analyze", base))
        .query(&[("url", page.url("/").to_string())])
        .send()
        .await
        .expect("Request should succeed");
    assert_eq!(response.status(), 200);

    let json: Value = response.json().await.expect("Body should be JSON");
    for key in ["seo", "ppc", "creative", "tech"] {
        assert!(json[key].is_array(), "{} should be an array", key);
        assert!(
            json["actions"][key].as_str().is_some_and(|a| !a.is_empty()),
            "{} action should be a non-empty string",
            key
        );
    }
    assert_eq!(json["ppc"][0], "SaaS competitive bidding detected");
    // Description and viewport missing.
    assert_eq!(json["score"], 60);
    assert_eq!(json["improvement"], 20);
}

#[tokio::test]
async fn test_analyze_endpoint_requires_url() {
    let base = spawn_server().await;

    for path in ["/analyze", "/analyze?url=", "/analyze?url=%20%20"] {
        let response = reqwest::get(format!("{}{}", base, path))
            .await
            .expect("Request should succeed");
        assert_eq!(response.status(), 400, "{} should be rejected", path);
        let json: Value = response.json().await.expect("Body should be JSON");
        assert_eq!(json, serde_json::json!({ "error": "URL is required" }));
    }
}

#[tokio::test]
async fn test_analyze_endpoint_reports_unreachable_target() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/analyze", base))
        .query(&[("url", closed_port_url())])
        .send()
        .await
        .expect("Request should succeed");
    assert_eq!(response.status(), 500);

    let json: Value = response.json().await.expect("Body should be JSON");
    assert_eq!(json["error"], "Failed to analyze URL. Ensure it is reachable.");
    assert!(json["details"].as_str().is_some_and(|d| !d.is_empty()));
    assert!(json.get("score").is_none());
}

#[tokio::test]
async fn test_analyze_endpoint_allows_cross_origin_requests() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .get(format!("{}/analyze", base))
        .header("Origin", "http://localhost:8080")
        .send()
        .await
        .expect("Request should succeed");

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
}
