//! The seam between the adapter and the HTTP client
//!
//! Everything above this trait only needs "give me the status document" and
//! "deliver this command", which keeps the dispatcher and scheduler testable
//! without a network.

use async_trait::async_trait;
use vlc_client::{Command, TransportError, VlcClient};

/// Source of raw status documents and sink for playback commands
#[async_trait]
pub trait StatusTransport: Send + Sync + 'static {
    /// Fetch the raw status document
    async fn fetch_status(&self) -> Result<String, TransportError>;

    /// Deliver a playback command; the returned body may be ignored
    async fn send_command(&self, command: Command) -> Result<String, TransportError>;
}

#[async_trait]
impl StatusTransport for VlcClient {
    async fn fetch_status(&self) -> Result<String, TransportError> {
        VlcClient::fetch_status(self).await
    }

    async fn send_command(&self, command: Command) -> Result<String, TransportError> {
        VlcClient::send_command(self, command).await
    }
}
