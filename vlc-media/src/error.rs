//! Error types for the vlc-media crate.

use std::time::Duration;

use thiserror::Error;
use vlc_client::TransportError;

/// Errors surfaced by the adapter to its direct callers.
///
/// Polling never produces these: an unreachable player is reported as a
/// not-running [`Status`](vlc_parser::Status) instead.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Invalid configuration provided
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A playback command could not be delivered to the player
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Polling needs a tokio runtime to spawn its timer task
    #[error("No tokio runtime available to run the poll scheduler")]
    NoRuntime,
}

/// Problems with an [`AdapterConfig`](crate::AdapterConfig)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Poll interval must be greater than 0")]
    ZeroPollInterval,

    #[error("Request timeout must be greater than 0")]
    ZeroRequestTimeout,

    /// A request outliving the interval would let ticks pile up
    #[error("Request timeout {timeout:?} must be shorter than the poll interval {interval:?}")]
    TimeoutExceedsInterval { timeout: Duration, interval: Duration },

    #[error("Invalid host configuration: {0}")]
    InvalidJson(String),
}

/// Convenience type alias for Results using AdapterError.
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_error_display() {
        let error = AdapterError::from(TransportError::Timeout);
        assert_eq!(error.to_string(), "Transport error: Request timed out");

        let error = AdapterError::from(ConfigError::ZeroPollInterval);
        assert_eq!(
            error.to_string(),
            "Configuration error: Poll interval must be greater than 0"
        );
    }

    #[test]
    fn test_timeout_error_mentions_both_durations() {
        let error = ConfigError::TimeoutExceedsInterval {
            timeout: Duration::from_millis(600),
            interval: Duration::from_millis(500),
        };
        let message = error.to_string();
        assert!(message.contains("600ms"));
        assert!(message.contains("500ms"));
    }
}
