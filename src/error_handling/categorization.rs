//! Transport error categorization.

use std::error::Error as StdError;

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Status errors are checked first because `error_for_status` errors carry
/// the status code; everything else falls back to the reqwest error class.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.status().is_some() || error.is_status() {
        return FetchErrorKind::Status;
    }

    if error.is_builder() {
        FetchErrorKind::InvalidTarget
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else {
        FetchErrorKind::Other
    }
}

/// Renders an error and its source chain as one line.
///
/// reqwest's top-level message ("error sending request for url ...") hides the
/// useful part (DNS failure, refused connection, timeout) in its sources.
pub fn describe_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl std::fmt::Display for Layer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_describe_error_chain_joins_sources() {
        let error = Layer {
            message: "error sending request",
            source: Some(Box::new(Layer {
                message: "client error (Connect)",
                source: Some(Box::new(Layer {
                    message: "Connection refused",
                    source: None,
                })),
            })),
        };
        assert_eq!(
            describe_error_chain(&error),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[test]
    fn test_describe_error_chain_skips_repeated_messages() {
        let error = Layer {
            message: "operation timed out",
            source: Some(Box::new(Layer {
                message: "timed out",
                source: None,
            })),
        };
        assert_eq!(describe_error_chain(&error), "operation timed out");
    }

    #[tokio::test]
    async fn test_categorize_builder_error_as_invalid_target() {
        let client = reqwest::Client::new();
        let error = client
            .get("http://")
            .send()
            .await
            .expect_err("empty host should not build a request");
        assert_eq!(
            categorize_reqwest_error(&error),
            FetchErrorKind::InvalidTarget
        );
    }

    #[tokio::test]
    async fn test_categorize_status_error() {
        use httptest::{matchers::*, responders::*, Expectation, Server};

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/missing"))
                .respond_with(status_code(404)),
        );
        let response = reqwest::get(server.url("/missing").to_string())
            .await
            .expect("mock server should answer");
        let error = response
            .error_for_status()
            .expect_err("404 should be an error status");
        assert_eq!(categorize_reqwest_error(&error), FetchErrorKind::Status);
        assert_eq!(error.status().map(|s| s.as_u16()), Some(404));
    }
}
