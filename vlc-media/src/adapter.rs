//! The VLC player adapter

use std::sync::Arc;

use async_trait::async_trait;
use vlc_client::{Command, VlcClient};
use vlc_parser::Status;

use crate::config::AdapterConfig;
use crate::dispatcher::CommandDispatcher;
use crate::error::Result;
use crate::plugin::MediaPlugin;
use crate::polling::{PollScheduler, PollSchedulerStats};
use crate::subscription::{StatusSubscribers, StatusSubscription, SubscriptionId};
use crate::transport::StatusTransport;

/// Name the adapter registers under
pub const PLAYER_NAME: &str = "vlc";

/// VLC cone icon
pub const ICON_PNG: &[u8] = include_bytes!("../assets/vlc-icon.png");

/// Polls a VLC instance for its status and forwards playback commands
///
/// # Example
///
/// ```rust,no_run
/// use vlc_media::{AdapterConfig, MediaPlugin, VlcAdapter};
///
/// # async fn example() -> vlc_media::Result<()> {
/// let adapter = VlcAdapter::new(AdapterConfig::default())?;
/// let mut statuses = adapter.subscribe();
///
/// adapter.activate()?;
/// if let Some(status) = statuses.recv().await {
///     println!("playing: {}", status.state().is_playing());
/// }
/// adapter.deactivate();
/// # Ok(())
/// # }
/// ```
pub struct VlcAdapter<T = VlcClient> {
    config: AdapterConfig,
    dispatcher: CommandDispatcher<T>,
    subscribers: Arc<StatusSubscribers>,
    scheduler: PollScheduler<T>,
}

impl VlcAdapter<VlcClient> {
    /// Build an adapter talking HTTP to the configured VLC web interface
    pub fn new(config: AdapterConfig) -> Result<Self> {
        config.validate()?;
        let client = VlcClient::with_timeout(config.connection.clone(), config.request_timeout)?;
        Self::with_transport(config, client)
    }

    /// Build an adapter from the host application's JSON configuration
    pub fn from_host_json(json: &str) -> Result<Self> {
        Self::new(AdapterConfig::from_host_json(json)?)
    }
}

impl<T: StatusTransport> VlcAdapter<T> {
    /// Build an adapter over any [`StatusTransport`]
    ///
    /// `config.connection` and `config.request_timeout` are left to the
    /// transport; only the poll interval is used here.
    pub fn with_transport(config: AdapterConfig, transport: T) -> Result<Self> {
        config.validate()?;

        let dispatcher = CommandDispatcher::new(Arc::new(transport));
        let subscribers = Arc::new(StatusSubscribers::new());
        let scheduler = PollScheduler::new(dispatcher.clone(), Arc::clone(&subscribers));

        Ok(Self {
            config,
            dispatcher,
            subscribers,
            scheduler,
        })
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Fetch the current status once, without emitting it
    pub async fn status(&self) -> Status {
        self.dispatcher.fetch_status().await
    }

    pub fn stats(&self) -> PollSchedulerStats {
        self.scheduler.stats()
    }

    async fn run_command(&self, command: Command) -> Result<Status> {
        match self.dispatcher.invoke(command).await {
            Ok(status) => {
                self.scheduler.publish(&status);
                Ok(status)
            }
            Err(error) => {
                tracing::warn!(%command, %error, "Command failed");
                Err(error.into())
            }
        }
    }
}

#[async_trait]
impl<T: StatusTransport> MediaPlugin for VlcAdapter<T> {
    fn name(&self) -> &'static str {
        PLAYER_NAME
    }

    fn icon(&self) -> &'static [u8] {
        ICON_PNG
    }

    fn activate(&self) -> Result<()> {
        tracing::info!(
            host = %self.config.connection.host,
            port = self.config.connection.port,
            "Activating VLC adapter"
        );
        self.scheduler.start(self.config.poll_interval)
    }

    fn deactivate(&self) {
        if self.scheduler.stop() {
            tracing::info!("Deactivated VLC adapter");
        }
    }

    fn is_active(&self) -> bool {
        self.scheduler.is_running()
    }

    async fn play_pause(&self) -> Result<Status> {
        self.run_command(Command::PlayPause).await
    }

    async fn next_track(&self) -> Result<Status> {
        self.run_command(Command::Next).await
    }

    async fn previous_track(&self) -> Result<Status> {
        self.run_command(Command::Previous).await
    }

    fn subscribe(&self) -> StatusSubscription {
        self.subscribers.subscribe()
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AdapterError, ConfigError};
    use std::time::Duration;
    use vlc_client::TransportError;
    use vlc_parser::PlaybackState;

    struct Offline;

    #[async_trait]
    impl StatusTransport for Offline {
        async fn fetch_status(&self) -> std::result::Result<String, TransportError> {
            Err(TransportError::Connect("connection refused".to_string()))
        }

        async fn send_command(&self, _command: Command) -> std::result::Result<String, TransportError> {
            Err(TransportError::Connect("connection refused".to_string()))
        }
    }

    #[test]
    fn test_icon_is_png() {
        let adapter = VlcAdapter::with_transport(AdapterConfig::default(), Offline).unwrap();
        assert_eq!(adapter.name(), "vlc");
        assert_eq!(adapter.icon_mime(), "image/png");
        assert!(adapter.icon().starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AdapterConfig::default().with_poll_interval(Duration::ZERO);
        let result = VlcAdapter::with_transport(config, Offline);
        assert!(matches!(
            result,
            Err(AdapterError::Config(ConfigError::ZeroPollInterval))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_player_reports_not_running() {
        let adapter = VlcAdapter::with_transport(AdapterConfig::default(), Offline).unwrap();
        let mut statuses = adapter.subscribe();

        adapter.activate().unwrap();
        assert!(adapter.is_active());

        let status = statuses.recv().await.unwrap();
        assert_eq!(status, Status::not_running());
        assert_eq!(status.state(), PlaybackState::Stopped);

        adapter.deactivate();
        assert!(!adapter.is_active());
    }

    #[tokio::test]
    async fn test_command_error_propagates() {
        let adapter = VlcAdapter::with_transport(AdapterConfig::default(), Offline).unwrap();
        let result = adapter.next_track().await;
        assert!(matches!(
            result,
            Err(AdapterError::Transport(TransportError::Connect(_)))
        ));
    }

    #[tokio::test]
    async fn test_command_status_not_published_while_inactive() {
        struct Online;

        #[async_trait]
        impl StatusTransport for Online {
            async fn fetch_status(&self) -> std::result::Result<String, TransportError> {
                Ok("<root><state>paused</state></root>".to_string())
            }

            async fn send_command(&self, _command: Command) -> std::result::Result<String, TransportError> {
                Ok(String::new())
            }
        }

        let adapter = VlcAdapter::with_transport(AdapterConfig::default(), Online).unwrap();
        let mut statuses = adapter.subscribe();

        let status = adapter.play_pause().await.unwrap();
        assert_eq!(status.state(), PlaybackState::Paused);
        assert_eq!(statuses.try_recv(), None);
    }
}
