//! Common utilities shared by the document parsers
//!
//! - [`tree`]: an owned element tree built from raw markup, with
//!   `Option`-returning accessors for attribute-keyed lookups
//!
//! ## Usage
//!
//! ```rust
//! use vlc_parser::common::{parse, XmlNode};
//!
//! let tree: XmlNode = parse("<root><state>paused</state></root>").unwrap();
//! assert_eq!(tree.child_text("state"), Some("paused"));
//! ```

pub mod tree;

pub use tree::{parse, XmlNode};
