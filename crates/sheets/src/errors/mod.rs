//! Error types for the sheets crate.

use thiserror::Error;

/// Errors raised while fetching a grid.
///
/// Every variant means the source is unavailable for this request; callers
/// are expected to surface them rather than degrade to an empty grid.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// The request did not complete within the configured timeout.
    #[error("Timed out fetching sheet '{sheet}'")]
    Timeout {
        /// The sheet that was requested
        sheet: String,
    },

    /// The request failed before a response was received.
    #[error("Network error fetching sheet '{sheet}': {source}")]
    Network {
        /// The sheet that was requested
        sheet: String,
        #[source]
        source: reqwest::Error,
    },

    /// The source answered with a non-success status.
    #[error("Sheet '{sheet}' returned HTTP {status}: {message}")]
    HttpStatus {
        /// The sheet that was requested
        sheet: String,
        /// HTTP status code
        status: u16,
        /// Error message extracted from the body, or the raw body
        message: String,
    },

    /// The body could not be decoded as a values document.
    #[error("Invalid response for sheet '{sheet}': {message}")]
    InvalidResponse {
        /// The sheet that was requested
        sheet: String,
        /// Description of the decoding failure
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl SheetsError {
    /// Whether a caller-side retry has a reasonable chance of succeeding.
    ///
    /// Timeouts, transport failures, rate limiting and server-side errors are
    /// transient. Authorization failures, missing sheets and undecodable
    /// bodies are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse { .. } | Self::Client(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> SheetsError {
        SheetsError::HttpStatus {
            sheet: "Zscore".to_string(),
            status: code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_timeout_is_transient() {
        let error = SheetsError::Timeout {
            sheet: "Zscore".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn test_rate_limit_and_server_errors_are_transient() {
        assert!(status(429).is_transient());
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
    }

    #[test]
    fn test_client_errors_are_terminal() {
        assert!(!status(400).is_transient());
        assert!(!status(403).is_transient());
        assert!(!status(404).is_transient());
    }

    #[test]
    fn test_invalid_response_is_terminal() {
        let error = SheetsError::InvalidResponse {
            sheet: "FScore".to_string(),
            message: "expected value".to_string(),
        };
        assert!(!error.is_transient());
        assert_eq!(
            error.to_string(),
            "Invalid response for sheet 'FScore': expected value"
        );
    }
}
