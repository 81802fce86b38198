//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body could not be encoded or response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a status outside 2xx.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or `HTTP <status>` when none was sent.
        message: String,
    },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A path or identifier that cannot be addressed as a resource.
    ///
    /// Raised before any request is sent, for `.`/`..` segments and empty
    /// identifiers.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl Error {
    /// HTTP status code, if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }

    /// Check if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Status { status: 401 | 403, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Status { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error document returned by the notebook server.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ErrorResponse {
    /// Pick the most descriptive non-empty text.
    pub(crate) fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.reason.filter(|r| !r.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let err = Error::Status {
            status: 404,
            message: "No such file".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "API error (404): No such file");

        let err = Error::Status {
            status: 403,
            message: "HTTP 403".to_string(),
        };
        assert!(err.is_auth_error());

        let err = Error::Status {
            status: 503,
            message: "HTTP 503".to_string(),
        };
        assert!(err.is_server_error());
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = Error::Config("missing token".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_response_prefers_message() {
        let resp: ErrorResponse =
            serde_json::from_str(r#"{"message": "File not found: a.txt", "reason": null}"#)
                .unwrap();
        assert_eq!(resp.into_message().as_deref(), Some("File not found: a.txt"));

        let resp: ErrorResponse =
            serde_json::from_str(r#"{"message": "", "reason": "Forbidden"}"#).unwrap();
        assert_eq!(resp.into_message().as_deref(), Some("Forbidden"));

        let resp: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.into_message(), None);
    }
}
