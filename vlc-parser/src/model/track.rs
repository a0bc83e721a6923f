//! Track information type

use serde::Serialize;

/// The item VLC is currently playing
///
/// Textual fields are always present; the player not reporting them
/// yields empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track title
    pub name: String,
    /// Artist name
    pub artist: String,
    /// Artwork location as reported by VLC (usually a `file://` URL)
    pub cover_url: Option<String>,
    /// Track duration in milliseconds, 0 when unknown
    pub duration_ms: u64,
}

impl Track {
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            ..Default::default()
        }
    }

    pub fn with_cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let track = Track::new("Song", "Band");
        assert_eq!(track.cover_url, None);
        assert_eq!(track.duration_ms, 0);
        assert_eq!(Track::default().name, "");
    }

    #[test]
    fn test_serializes_camel_case() {
        let track = Track::new("Song", "Band")
            .with_cover_url("file:///art.jpg")
            .with_duration_ms(300_000);
        let json = serde_json::to_value(&track).unwrap();

        assert_eq!(json["coverUrl"], "file:///art.jpg");
        assert_eq!(json["durationMs"], 300_000);
        assert_eq!(json["artist"], "Band");
    }
}
