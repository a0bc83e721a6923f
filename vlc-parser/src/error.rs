//! Error types for XML parsing operations

use thiserror::Error;

/// Errors that can occur while turning markup into an element tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The tokenizer rejected the input
    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// Input contained no element at all
    #[error("Document has no root element")]
    NoRootElement,

    /// The document ended while an element was still open
    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),

    /// A second top-level element followed the root
    #[error("Document has more than one root element")]
    MultipleRootElements,

    /// Non-whitespace text appeared before or after the root element
    #[error("Text outside of the root element")]
    TextOutsideRoot,

    /// An attribute could not be read or unescaped
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Element or attribute names that are not valid UTF-8
    #[error("Invalid UTF-8 in markup: {0}")]
    Encoding(String),
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
