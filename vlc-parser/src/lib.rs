//! # vlc-parser
//!
//! XML parsing and status normalization for VLC's Lua web interface.
//!
//! ## Usage
//!
//! ### Top-level convenience access
//! ```rust
//! use vlc_parser::{status_from_xml, PlaybackState};
//!
//! let status = status_from_xml("<root><state>playing</state><volume>160</volume></root>");
//! assert!(status.is_running());
//! assert_eq!(status.state(), PlaybackState::Playing);
//! assert_eq!(status.volume(), Some(0.5));
//! ```
//!
//! ### Two-stage access
//! ```rust
//! use vlc_parser::{normalize, parse};
//!
//! let tree = parse("<root><state>paused</state></root>").ok();
//! let status = normalize(tree.as_ref());
//! assert!(status.is_running());
//! ```

pub mod common;
pub mod error;
pub mod model;
pub mod services;

// Re-export error types for convenient top-level access
pub use error::{ParseError, ParseResult};

pub use common::{parse, XmlNode};
pub use model::{PlaybackState, Status, Track};
pub use services::status::{normalize, status_from_xml};
