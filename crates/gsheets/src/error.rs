//! Error types for gsheets

use gsheets_atom::AtomError;
use thiserror::Error;

/// Result type alias using [`SheetsError`]
pub type SheetsResult<T> = std::result::Result<T, SheetsError>;

/// Errors raised by request executors.
///
/// The API objects never inspect these; they are handed back to the caller
/// unchanged inside [`SheetsError::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP client error (connection, TLS, timeout, body decoding)
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Configured header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Any other executor failure
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TransportError::Other(msg.into())
    }
}

/// Errors that can occur when working with spreadsheets and worksheets
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The document could not be parsed or lacks a required element/link
    #[error(transparent)]
    Atom(#[from] AtomError),

    /// The request executor failed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl SheetsError {
    /// Malformed XML, timestamp or integer text
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SheetsError::Atom(e) if e.is_parse_error())
    }

    /// An expected element was absent
    pub fn is_missing_field(&self) -> bool {
        matches!(self, SheetsError::Atom(AtomError::MissingField(_)))
    }

    /// No link carried the requested relation
    pub fn is_link_not_found(&self) -> bool {
        matches!(self, SheetsError::Atom(AtomError::LinkNotFound(_)))
    }

    /// The request executor failed
    pub fn is_transport(&self) -> bool {
        matches!(self, SheetsError::Transport(_))
    }
}
