//! # VLC Media - "now playing" adapter for VLC
//!
//! Polls the VLC web interface for the player status and forwards playback
//! commands to it:
//!
//! ```rust,no_run
//! use vlc_media::{AdapterConfig, MediaPlugin, VlcAdapter};
//!
//! #[tokio::main]
//! async fn main() -> vlc_media::Result<()> {
//!     let config = AdapterConfig::from_host_json(r#"{"vlc": {"port": 8080}}"#)?;
//!     let adapter = VlcAdapter::new(config)?;
//!
//!     let mut statuses = adapter.subscribe();
//!     adapter.activate()?;
//!
//!     while let Some(status) = statuses.recv().await {
//!         if let Some(track) = status.track() {
//!             println!("{} - {}", track.artist, track.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Fixed-interval polling**: one status snapshot every 500 ms by default
//! - **Graceful offline handling**: an unreachable player reads as not running
//! - **Commands**: play/pause, next and previous, each answered with the fresh status
//! - **Explicit subscriptions**: statuses reach every subscriber in registration order
//!
//! ## Architecture
//!
//! ```text
//! vlc-media (VlcAdapter, PollScheduler, subscriptions)
//!     ↓
//! vlc-parser (markup tree + status normalization)
//!     ↓
//! vlc-client (HTTP transport to requests/status.xml)
//! ```

pub use adapter::{VlcAdapter, ICON_PNG, PLAYER_NAME};
pub use config::{AdapterConfig, DEFAULT_POLL_INTERVAL};
pub use dispatcher::CommandDispatcher;
pub use error::{AdapterError, ConfigError, Result};
pub use plugin::MediaPlugin;
pub use polling::{PollScheduler, PollSchedulerStats};
pub use subscription::{StatusSubscribers, StatusSubscription, SubscriptionId};
pub use transport::StatusTransport;

// Re-export the types callers need from the lower layers
pub use vlc_client::{Command, ConnectionConfig, TransportError, VlcClient};
pub use vlc_parser::{PlaybackState, Status, Track};

mod adapter;
mod config;
mod dispatcher;
mod error;
pub mod logging;
mod plugin;
pub mod polling;
mod subscription;
mod transport;
