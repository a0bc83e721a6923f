//! Connection settings for a VLC web interface

use serde::{Deserialize, Serialize};
use url::Url;

use crate::TransportError;

/// Default port of VLC's HTTP interface
pub const DEFAULT_PORT: u16 = 8080;

/// Default password shipped in the host's configuration template
pub const DEFAULT_PASSWORD: &str = "password";

/// The web interface only listens on the local machine
pub const DEFAULT_HOST: &str = "localhost";

/// Where and how to reach a VLC instance
///
/// Deserializes from the `vlc` section of the host configuration; every
/// key is optional and falls back to the defaults below.
///
/// ```json
/// { "port": 8080, "username": "", "password": "password" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Host name of the player
    /// Default: "localhost"
    pub host: String,

    /// Port of the HTTP interface
    /// Default: 8080
    pub port: u16,

    /// Basic auth user name (VLC ignores it, but sends it along)
    /// Default: ""
    pub username: String,

    /// Basic auth password configured in VLC's Lua HTTP settings
    /// Default: "password"
    pub password: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl ConnectionConfig {
    /// Create a config for the given host and port with default credentials
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Base URL every request is resolved against
    ///
    /// Credentials are not embedded here; they travel as a basic auth
    /// header so they never end up in logs.
    pub fn base_url(&self) -> Result<Url, TransportError> {
        Url::parse(&format!("http://{}:{}/", self.host, self.port))
            .map_err(|e| TransportError::InvalidUrl(format!("{}:{}: {}", self.host, self.port, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.username, "");
        assert_eq!(config.password, "password");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ConnectionConfig = serde_json::from_str(r#"{ "port": 9090 }"#).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.password, "password");

        let config: ConnectionConfig =
            serde_json::from_str(r#"{ "username": "me", "password": "secret" }"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.username, "me");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_base_url() {
        let url = ConnectionConfig::new("127.0.0.1", 8081).base_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8081/");
        assert_eq!(url.username(), "");
    }

    #[test]
    fn test_invalid_host() {
        let result = ConnectionConfig::new("bad host", 8080).base_url();
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConnectionConfig::default()
            .with_port(4212)
            .with_credentials("", "hunter2");
        assert_eq!(config.port, 4212);
        assert_eq!(config.password, "hunter2");
    }
}
