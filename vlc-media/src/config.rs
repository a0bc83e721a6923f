//! Configuration types for the vlc-media crate
//!
//! This module defines the settings that control how often the adapter
//! polls VLC and how long a single request may take.

use std::time::Duration;

use serde::Deserialize;
use vlc_client::ConnectionConfig;

use crate::error::ConfigError;

/// Default time between two status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Configuration for a [`VlcAdapter`](crate::VlcAdapter)
///
/// The connection settings are fixed once the adapter is built.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// Where the VLC web interface listens and its credentials
    /// Default: localhost:8080, user "", password "password"
    pub connection: ConnectionConfig,

    /// Interval between status polls while active
    /// Default: 500 milliseconds
    pub poll_interval: Duration,

    /// Timeout for a single HTTP request
    /// Default: 400 milliseconds
    pub request_timeout: Duration,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: vlc_client::DEFAULT_TIMEOUT,
        }
    }
}

/// Shape of the host configuration file; only the `vlc` key matters here
#[derive(Debug, Default, Deserialize)]
struct HostConfig {
    #[serde(default)]
    vlc: Option<ConnectionConfig>,
}

impl AdapterConfig {
    /// Create a new AdapterConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the config from the host application's JSON configuration
    ///
    /// ```json
    /// { "vlc": { "port": 8080, "username": "", "password": "password" } }
    /// ```
    ///
    /// A missing `vlc` section, or missing keys inside it, fall back to
    /// the defaults.
    pub fn from_host_json(json: &str) -> Result<Self, ConfigError> {
        let host: HostConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;

        Ok(Self {
            connection: host.vlc.unwrap_or_default(),
            ..Default::default()
        })
    }

    /// Create an AdapterConfig that polls aggressively, for local players
    /// with a fast HTTP interface
    pub fn fast_polling() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
            request_timeout: Duration::from_millis(200),
            ..Default::default()
        }
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroRequestTimeout);
        }

        if self.request_timeout >= self.poll_interval {
            return Err(ConfigError::TimeoutExceedsInterval {
                timeout: self.request_timeout,
                interval: self.poll_interval,
            });
        }

        Ok(())
    }

    /// Builder pattern methods for fluent configuration

    pub fn with_connection(mut self, connection: ConnectionConfig) -> Self {
        self.connection = connection;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
