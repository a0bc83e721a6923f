//! Status document normalizer
//!
//! Turns the element tree of VLC's `requests/status.xml` into a [`Status`]
//! snapshot. The document looks like:
//!
//! ```xml
//! <root>
//!   <state>playing</state>
//!   <volume>256</volume>
//!   <time>42</time>
//!   <length>300</length>
//!   <information>
//!     <category name="meta">
//!       <info name="title">Song</info>
//!       <info name="artist">Band</info>
//!       <info name="artwork_url">file:///tmp/art.jpg</info>
//!     </category>
//!   </information>
//! </root>
//! ```
//!
//! [`Status`]: crate::model::Status

pub mod parser;

pub use parser::{normalize, status_from_xml};
