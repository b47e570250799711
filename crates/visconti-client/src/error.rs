//! Error types for backend calls

use thiserror::Error;

/// Result type alias for backend calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by an [`AdminApi`](crate::AdminApi) implementation
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `message` field of the JSON error body, if any
        message: Option<String>,
    },

    /// The response body did not match the expected schema
    #[error("Unexpected response from {endpoint}: {source}")]
    Parse {
        /// Path of the failing endpoint
        endpoint: String,
        /// Schema error
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create a status error
    pub fn status(status: u16, message: Option<impl Into<String>>) -> Self {
        Self::Status {
            status,
            message: message.map(Into::into),
        }
    }

    /// Message supplied by the server, suitable for showing to the user
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// HTTP status, when the server answered
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn test_user_message_only_from_server() {
        let err = ClientError::status(413, Some("Image too large"));
        assert_eq!(err.user_message(), Some("Image too large"));
        assert_eq!(err.status_code(), Some(413));

        assert_eq!(ClientError::status(500, None::<String>).user_message(), None);
        assert_eq!(ClientError::status(500, Some("  ")).user_message(), None);
        assert_eq!(ClientError::InvalidRequest("x".into()).user_message(), None);
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<u8>("\"nope\"").unwrap_err();
        let err = ClientError::Parse {
            endpoint: "api/menu".into(),
            source,
        };
        assert!(err.to_string().starts_with("Unexpected response from api/menu"));
        assert!(err.source().is_some());
    }
}
