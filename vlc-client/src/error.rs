//! Error types for the VLC HTTP client

use thiserror::Error;

/// Errors that can occur while talking to VLC's web interface
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured host/port does not form a usable URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The player could not be reached (connection refused, DNS, ...)
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The player answered with a non-2xx status code
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Any other HTTP-level failure, including reading the body
    #[error("Network/HTTP error: {0}")]
    Network(String),
}

impl TransportError {
    /// Whether the failure means the player is simply not there
    pub fn is_unreachable(&self) -> bool {
        matches!(self, TransportError::Connect(_) | TransportError::Timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connect(error.to_string())
        } else if let Some(status) = error.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        assert_eq!(TransportError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            TransportError::Status(401).to_string(),
            "Unexpected HTTP status: 401"
        );
        assert_eq!(
            TransportError::Connect("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
    }

    #[test]
    fn test_unreachable_classification() {
        assert!(TransportError::Timeout.is_unreachable());
        assert!(TransportError::Connect("refused".to_string()).is_unreachable());
        assert!(!TransportError::Status(500).is_unreachable());
        assert!(!TransportError::InvalidUrl("bad".to_string()).is_unreachable());
    }
}
