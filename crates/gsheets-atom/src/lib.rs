//! # gsheets-atom
//!
//! Atom/GData XML document model for the gsheets client.
//!
//! Google's legacy Spreadsheets API speaks Atom: every resource is an
//! `<entry>` and every collection is a `<feed>` of entries, extended with
//! elements from the `gs` namespace. This crate provides:
//! - [`AtomDocument`] and [`Element`] - an owned, read-only element tree
//! - [`parse_timestamp`] - decoding of `<updated>`/`<published>` values
//! - [`EntryBuilder`] - escaped construction of request entry bodies
//!
//! ## Example
//!
//! ```rust
//! use gsheets_atom::AtomDocument;
//!
//! let doc = AtomDocument::parse(
//!     r#"<entry xmlns="http://www.w3.org/2005/Atom"><title>Budget</title></entry>"#,
//! ).unwrap();
//! assert_eq!(doc.root().child_text("title").unwrap(), "Budget");
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod timestamp;

pub use builder::EntryBuilder;
pub use document::{AtomDocument, Element};
pub use error::{AtomError, AtomResult};
pub use timestamp::parse_timestamp;

/// Atom syndication format namespace
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Google Spreadsheets extension namespace, bound to the `gs` prefix
pub const GS_NS: &str = "http://schemas.google.com/spreadsheets/2006";
