//! Error types for the ATC client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the ATC client
///
/// A 404 on a single-pipeline operation is reported as absence
/// (`Ok(false)` / `Ok(None)`) and never reaches this type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an unexpected status code
    ///
    /// The status displays with its reason phrase, e.g. `418 I'm a teapot`.
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status returned by the ATC
        status: StatusCode,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(err) => err.status(),
            _ => None,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contains_status_line() {
        let err = ClientError::api_error(StatusCode::IM_A_TEAPOT, "");
        assert!(err.to_string().contains("418 I'm a teapot"));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_server_error_classification() {
        let err = ClientError::api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.is_server_error());
        assert!(err.to_string().ends_with("boom"));
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = ClientError::ParseError("bad json".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_client_error());
    }
}
