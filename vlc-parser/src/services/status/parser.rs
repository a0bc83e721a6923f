//! Status normalization implementation
//!
//! Normalization never fails. Every missing or unparseable field degrades to
//! its absent/default representation on its own; only a missing document
//! (or one that is not a status document at all) yields a not-running status.

use crate::common::{parse, XmlNode};
use crate::model::{PlaybackState, Status, Track};

/// Root element of the status document
pub const ROOT_ELEMENT: &str = "root";
pub const STATE_FIELD: &str = "state";
pub const VOLUME_FIELD: &str = "volume";
/// Playback position, in whole seconds
pub const TIME_FIELD: &str = "time";
/// Duration of the current item, in whole seconds
pub const LENGTH_FIELD: &str = "length";

pub const INFORMATION_ELEMENT: &str = "information";
pub const CATEGORY_ELEMENT: &str = "category";
pub const INFO_ELEMENT: &str = "info";
/// Attribute keying both `<category>` and `<info>` entries
pub const NAME_ATTRIBUTE: &str = "name";

/// Category holding the item's metadata
pub const META_CATEGORY: &str = "meta";
pub const TITLE_INFO: &str = "title";
pub const ARTIST_INFO: &str = "artist";
pub const ARTWORK_INFO: &str = "artwork_url";

/// Raw `<volume>` value that maps to a normalized volume of 1.0
pub const VOLUME_SCALE: f64 = 320.0;

pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Exclusive upper bound for a millisecond value that fits in `u64`
const MAX_MILLIS: f64 = u64::MAX as f64;

/// Normalize a parsed status document.
///
/// `None` stands for an upstream transport or parse failure.
pub fn normalize(tree: Option<&XmlNode>) -> Status {
    let Some(root) = tree.filter(|node| node.name() == ROOT_ELEMENT) else {
        return Status::not_running();
    };

    let state = root
        .child_text(STATE_FIELD)
        .map(PlaybackState::from_vlc_state)
        .unwrap_or(PlaybackState::Unknown);

    let volume = root
        .child_text(VOLUME_FIELD)
        .and_then(parse_number)
        .map(|raw| raw / VOLUME_SCALE);

    let progress_ms = root.child_text(TIME_FIELD).and_then(seconds_to_millis);

    let track = meta_category(root).map(|meta| Track {
        name: info_text(meta, TITLE_INFO).unwrap_or_default().to_string(),
        artist: info_text(meta, ARTIST_INFO).unwrap_or_default().to_string(),
        cover_url: info_text(meta, ARTWORK_INFO).map(str::to_string),
        duration_ms: root
            .child_text(LENGTH_FIELD)
            .and_then(seconds_to_millis)
            .unwrap_or(0),
    });

    Status::running(state, volume, progress_ms, track)
}

/// Parse and normalize a raw status document.
///
/// Malformed markup collapses into [`Status::not_running`].
pub fn status_from_xml(xml: &str) -> Status {
    match parse(xml) {
        Ok(tree) => normalize(Some(&tree)),
        Err(error) => {
            tracing::debug!(%error, "Discarding unparseable status document");
            normalize(None)
        }
    }
}

fn meta_category(root: &XmlNode) -> Option<&XmlNode> {
    root.child(INFORMATION_ELEMENT)?
        .find_child(CATEGORY_ELEMENT, NAME_ATTRIBUTE, META_CATEGORY)
}

fn info_text<'a>(meta: &'a XmlNode, name: &str) -> Option<&'a str> {
    meta.find_child(INFO_ELEMENT, NAME_ATTRIBUTE, name)
        .and_then(XmlNode::text)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// VLC reports -1 for streams of unknown length; values past `u64` are absent
fn seconds_to_millis(text: &str) -> Option<u64> {
    parse_number(text)
        .filter(|seconds| *seconds >= 0.0)
        .map(|seconds| (seconds * MILLIS_PER_SECOND).round())
        .filter(|millis| *millis < MAX_MILLIS)
        .map(|millis| millis as u64)
}
