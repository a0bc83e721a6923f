//! Command dispatch and the shared status refresh path

use std::sync::Arc;

use vlc_client::{Command, TransportError};
use vlc_parser::{status_from_xml, Status};

use crate::transport::StatusTransport;

/// Sends playback commands and turns status documents into [`Status`] values
///
/// Cloning is cheap; clones share the same transport.
#[derive(Debug)]
pub struct CommandDispatcher<T> {
    transport: Arc<T>,
}

impl<T> Clone for CommandDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: StatusTransport> CommandDispatcher<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Fetch, parse and normalize the current status
    ///
    /// Never fails: transport and parse errors yield [`Status::not_running`].
    pub async fn fetch_status(&self) -> Status {
        match self.transport.fetch_status().await {
            Ok(body) => status_from_xml(&body),
            Err(error) => {
                tracing::debug!(%error, "Status fetch failed, reporting player as not running");
                Status::not_running()
            }
        }
    }

    /// Deliver a command without waiting for the resulting state
    pub async fn send_command(&self, command: Command) -> Result<(), TransportError> {
        tracing::debug!(%command, "Sending command");
        self.transport.send_command(command).await.map(|_body| ())
    }

    /// Deliver a command, then report the state the player ends up in
    ///
    /// Fails only when the command itself could not be delivered, in which
    /// case no status fetch is attempted. A failing follow-up fetch is not a
    /// command failure and resolves to [`Status::not_running`].
    pub async fn invoke(&self, command: Command) -> Result<Status, TransportError> {
        self.send_command(command).await?;
        Ok(self.fetch_status().await)
    }
}
