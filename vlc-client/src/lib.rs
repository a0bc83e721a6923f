//! Private HTTP client for VLC's web interface
//!
//! This crate provides a minimal async client for the `requests/status.xml`
//! endpoint of VLC's Lua HTTP interface. The same endpoint serves both the
//! status document and playback commands (passed as a `command` query
//! parameter). Requests are never retried; callers poll again instead.

mod command;
mod config;
mod error;

pub use command::Command;
pub use config::{ConnectionConfig, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT};
pub use error::TransportError;

use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use url::Url;

/// Path of the status/command endpoint, relative to the base URL
pub const STATUS_PATH: &str = "requests/status.xml";

/// Request timeout, kept below the default poll interval so a hung
/// request never stalls the next tick
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(400);

/// A minimal client for one VLC instance
#[derive(Debug, Clone)]
pub struct VlcClient {
    http: reqwest::Client,
    config: ConnectionConfig,
    base_url: Url,
}

impl VlcClient {
    /// Create a client with the default request timeout
    pub fn new(config: ConnectionConfig) -> Result<Self, TransportError> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(config: ConnectionConfig, timeout: Duration) -> Result<Self, TransportError> {
        let base_url = config.base_url()?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    /// The connection settings this client was built with
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the raw status document
    pub async fn fetch_status(&self) -> Result<String, TransportError> {
        self.fetch(None).await
    }

    /// Send a playback command; the response body is the status document
    /// as VLC saw it before the command took effect
    pub async fn send_command(&self, command: Command) -> Result<String, TransportError> {
        self.fetch(Some(command.token())).await
    }

    /// GET the status endpoint, optionally with a raw command token
    pub async fn fetch(&self, command: Option<&str>) -> Result<String, TransportError> {
        match command {
            Some(token) => self.fetch_path(STATUS_PATH, &[("command", token)]).await,
            None => self.fetch_path(STATUS_PATH, &[]).await,
        }
    }

    /// GET an arbitrary path below the base URL
    pub async fn fetch_path(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", path, e)))?;

        tracing::trace!(%url, ?query, "GET");

        let mut request = self
            .http
            .get(url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CACHE_CONTROL, "no-cache");

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), path, "VLC rejected request");
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = VlcClient::new(ConnectionConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(client.config().password, "password");
    }

    #[test]
    fn test_client_rejects_invalid_host() {
        let result = VlcClient::new(ConnectionConfig::new("not a host", 8080));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_status_url_resolution() {
        let client = VlcClient::new(ConnectionConfig::new("127.0.0.1", 9000)).unwrap();
        let url = client.base_url().join(STATUS_PATH).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/requests/status.xml");
    }
}
