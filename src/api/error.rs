//! Error classification for trip API calls.

use thiserror::Error;

/// Errors that can occur while talking to the trip API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, refused connection, reset).
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Backend answered with a non-2xx status. `message` is the best
    /// human-readable text recovered from the body.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Body was not valid JSON for the expected shape.
    #[error("Malformed server response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Base URL or endpoint path could not be turned into a URL.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// Short machine-readable tag, used as a structured log field.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }

    /// True for failures that happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Connection { .. } | ApiError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_server_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Scooter not found".to_string(),
        };
        assert_eq!(err.to_string(), "Scooter not found");
        assert_eq!(err.error_type(), "status_error");
        assert!(!err.is_transport());
    }

    #[test]
    fn timeout_is_transport() {
        let err = ApiError::Timeout { duration: 10 };
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Request timeout after 10s");
    }

    #[test]
    fn decode_error_wraps_serde_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Decode { source };
        assert!(err.to_string().starts_with("Malformed server response"));
        assert_eq!(err.error_type(), "decode_error");
    }
}
