//! Atom error types

use thiserror::Error;

/// Result type for Atom document operations
pub type AtomResult<T> = std::result::Result<T, AtomError>;

/// Errors that can occur while reading an Atom document
#[derive(Debug, Error)]
pub enum AtomError {
    /// XML syntax error reported by the tokenizer
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Element or attribute name that is not valid UTF-8
    #[error("Invalid UTF-8 in XML name: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Structurally invalid document (unclosed tags, missing root, ...)
    #[error("Malformed XML document: {0}")]
    Malformed(String),

    /// Timestamp text that could not be decoded
    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Integer field that could not be decoded
    #[error("Invalid integer '{value}': {source}")]
    Integer {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Expected child element is absent
    #[error("Missing element: <{0}>")]
    MissingField(String),

    /// No `link` element carries the requested relation
    #[error("No link with rel=\"{0}\"")]
    LinkNotFound(String),
}

impl AtomError {
    /// Create a new "malformed" error with a message
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        AtomError::Malformed(msg.into())
    }

    /// Whether the input text itself could not be decoded (XML syntax,
    /// document structure, timestamps or integers)
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AtomError::Xml(_)
                | AtomError::Attribute(_)
                | AtomError::Utf8(_)
                | AtomError::Malformed(_)
                | AtomError::Timestamp { .. }
                | AtomError::Integer { .. }
        )
    }
}
