//! Status snapshot type

use serde::Serialize;

use super::{PlaybackState, Track};

/// A complete snapshot of the player, recomputed on every poll
///
/// The only way to build an inactive status is [`Status::not_running`], so
/// an unreachable player never carries stale volume or track data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    is_running: bool,
    state: PlaybackState,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    track: Option<Track>,
}

impl Status {
    /// The player could not be reached or did not answer with a status document
    pub fn not_running() -> Self {
        Self {
            is_running: false,
            state: PlaybackState::Stopped,
            volume: None,
            progress_ms: None,
            track: None,
        }
    }

    /// A status read from a reachable player
    ///
    /// `volume` is clamped into `[0, 1]`; non-finite values are dropped.
    pub fn running(
        state: PlaybackState,
        volume: Option<f64>,
        progress_ms: Option<u64>,
        track: Option<Track>,
    ) -> Self {
        Self {
            is_running: true,
            state,
            volume: volume
                .filter(|v| v.is_finite())
                .map(|v| v.clamp(0.0, 1.0)),
            progress_ms,
            track,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Volume in `[0, 1]`
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Position in the current item, in milliseconds
    pub fn progress_ms(&self) -> Option<u64> {
        self.progress_ms
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::not_running()
    }
}
