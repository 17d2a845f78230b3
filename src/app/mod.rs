//! Request-level helpers shared by the CLI and the HTTP wiring.

pub mod url;

// Re-export public API
pub use url::normalize_target;
