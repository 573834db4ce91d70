//! Fetch error types

use thiserror::Error;

/// Errors from a single asset fetch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, etc.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not finish within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the expected `{ "data": [...] }` JSON
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Longest response body kept in [`FetchError::Status`]
pub const MAX_STATUS_MESSAGE: usize = 200;

/// Message for a non-success response.
///
/// Uses the first line of a plain-text body, cut to [`MAX_STATUS_MESSAGE`]
/// characters. Falls back to `reason` for an empty or HTML body.
pub fn status_message(body: &str, reason: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.starts_with('<') {
        return reason.to_string();
    }

    let line = body.lines().next().unwrap_or_default().trim_end();
    if line.chars().count() > MAX_STATUS_MESSAGE {
        let cut: String = line.chars().take(MAX_STATUS_MESSAGE).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FetchError::Timeout(10_000);
        assert_eq!(err.to_string(), "Request timed out after 10000 ms");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message("maintenance\n", "Service Unavailable"), "maintenance");
        assert_eq!(status_message("", "Not Found"), "Not Found");
        assert_eq!(
            status_message("<!DOCTYPE HTML>\n<html><body>404</body></html>", "Not Found"),
            "Not Found"
        );
        assert_eq!(status_message("rate limited\nretry later", "Too Many Requests"), "rate limited");

        let long = "x".repeat(1000);
        let message = status_message(&long, "Bad Gateway");
        assert_eq!(message.chars().count(), MAX_STATUS_MESSAGE + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
