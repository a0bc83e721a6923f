//! Document-specific parsers organized by VLC endpoint
//!
//! ## Available Documents
//!
//! - [`status`]: Normalizer for `requests/status.xml`
//!
//! ## Usage
//!
//! ```rust
//! use vlc_parser::services::status::{normalize, status_from_xml};
//! ```

pub mod status;
