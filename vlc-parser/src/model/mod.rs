//! Normalized "now playing" data model
//!
//! These types are the stable contract handed to the host application,
//! independent of how VLC happened to format its status document.

mod playback_state;
mod status;
mod track;

pub use playback_state::PlaybackState;
pub use status::Status;
pub use track::Track;
