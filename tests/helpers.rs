// Shared test helpers for mock pages and analyzers.

use httptest::{matchers::*, responders::*, Expectation, Server};
use site_insights::Analyzer;

/// Starts a mock server that serves `body` at `path` exactly once.
#[allow(dead_code)] // Used by other test files
pub fn serve_page(path: &'static str, body: &str) -> Server {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .respond_with(status_code(200).body(body.to_string())),
    );
    server
}

/// Analyzer with the default network policy.
#[allow(dead_code)]
pub fn default_analyzer() -> Analyzer {
    Analyzer::new().expect("Failed to create analyzer")
}

/// Returns a local URL on which nothing is listening.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener
        .local_addr()
        .expect("Listener should have an address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

/// Markup with `images` images of which `with_alt` carry ALT text, plus a
/// complete head so only the image rule varies.
#[allow(dead_code)]
pub fn gallery_page(images: usize, with_alt: usize) -> String {
    let mut body = String::new();
    for i in 0..images {
        if i < with_alt {
            body.push_str(&format!(r#"<img src="{i}.jpg" alt="photo {i}">"#));
        } else {
            body.push_str(&format!(r#"<img src="{i}.jpg">"#));
        }
    }
    format!(
        r#"<html><head><title>Gallery</title><meta name="viewport" content="width=device-width"></head><body><h1>Gallery</h1>{body}</body></html>"#
    )
}
