//! Host-facing player contract

use async_trait::async_trait;
use vlc_parser::Status;

use crate::error::Result;
use crate::subscription::{StatusSubscription, SubscriptionId};

/// A media player the host can show and control
///
/// The host activates a plugin when it becomes the selected player and
/// deactivates it when another one takes over. Statuses arrive through
/// [`subscribe`](MediaPlugin::subscribe) only while the plugin is active.
#[async_trait]
pub trait MediaPlugin: Send + Sync {
    /// Stable identifier shown by the host
    fn name(&self) -> &'static str;

    /// Encoded icon image
    fn icon(&self) -> &'static [u8];

    /// MIME type of [`icon`](MediaPlugin::icon)
    fn icon_mime(&self) -> &'static str {
        "image/png"
    }

    /// Begin polling; a no-op when already active
    fn activate(&self) -> Result<()>;

    /// Stop polling; no status is emitted after this returns
    fn deactivate(&self);

    fn is_active(&self) -> bool;

    async fn play_pause(&self) -> Result<Status>;

    async fn next_track(&self) -> Result<Status>;

    async fn previous_track(&self) -> Result<Status>;

    fn subscribe(&self) -> StatusSubscription;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
