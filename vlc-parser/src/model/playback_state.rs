//! Playback state enumeration

use serde::Serialize;

/// Current playback state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Currently playing media
    Playing,
    /// Playback is paused
    Paused,
    /// Nothing is playing
    #[default]
    Stopped,
    /// The player reported a state this crate does not recognize
    Unknown,
}

impl PlaybackState {
    /// Parse from VLC's `<state>` value
    ///
    /// Handles the values VLC's web interface emits:
    /// - "playing"
    /// - "paused"
    /// - "stopped"
    ///
    /// Anything else becomes [`PlaybackState::Unknown`] rather than being
    /// guessed as stopped.
    pub fn from_vlc_state(state: &str) -> Self {
        let state = state.trim();
        if state.eq_ignore_ascii_case("playing") {
            PlaybackState::Playing
        } else if state.eq_ignore_ascii_case("paused") {
            PlaybackState::Paused
        } else if state.eq_ignore_ascii_case("stopped") {
            PlaybackState::Stopped
        } else {
            PlaybackState::Unknown
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}
