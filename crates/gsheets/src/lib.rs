//! # gsheets
//!
//! Client objects for Google's legacy Spreadsheets (GData/Atom) API.
//!
//! - [`Spreadsheet`] - a spreadsheet entry: id, title, updated time, and
//!   the operations to list and add worksheets
//! - [`Worksheet`], [`WorksheetFeed`], [`SpreadsheetFeed`] - the other
//!   resources returned by the API
//! - [`ServiceRequest`] - the executor seam; every network operation takes
//!   one explicitly, so tests can substitute a fake
//! - [`HttpServiceRequest`] - blocking `reqwest` executor (feature `http`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use gsheets::{ServiceConfig, SpreadsheetService};
//!
//! # fn example() -> gsheets::SheetsResult<()> {
//! let config = ServiceConfig::default().with_header("Authorization", "Bearer <token>");
//! let service = SpreadsheetService::with_http(config)?;
//!
//! if let Some(spreadsheet) = service.spreadsheet_by_title("Budget")? {
//!     let worksheet = spreadsheet.add_worksheet(service.executor(), "2024")?;
//!     println!("created {}", worksheet.id()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod feed;
#[cfg(feature = "http")]
pub mod http;
pub mod request;
pub mod service;
pub mod spreadsheet;
pub mod worksheet;

pub use config::ServiceConfig;
pub use error::{SheetsError, SheetsResult, TransportError};
pub use feed::{SpreadsheetFeed, WorksheetFeed};
#[cfg(feature = "http")]
pub use http::HttpServiceRequest;
pub use request::{Method, Request, ServiceRequest};
pub use service::SpreadsheetService;
pub use spreadsheet::{Spreadsheet, DEFAULT_COL_COUNT, DEFAULT_ROW_COUNT, REL_WORKSHEETS_FEED};
pub use worksheet::Worksheet;

// Re-export the document model so callers can build from parsed documents
pub use gsheets_atom::{AtomDocument, AtomError, Element};
