//! Entry point for listing spreadsheets

use crate::config::ServiceConfig;
use crate::error::SheetsResult;
use crate::feed::SpreadsheetFeed;
use crate::request::{Request, ServiceRequest};
use crate::spreadsheet::Spreadsheet;

/// Lists the spreadsheets visible through an executor.
///
/// ```rust
/// use gsheets::{Request, ServiceConfig, ServiceRequest, SpreadsheetService, TransportError};
///
/// struct Canned;
///
/// impl ServiceRequest for Canned {
///     fn execute(&self, _request: &Request) -> Result<String, TransportError> {
///         Ok("<feed><entry><title>Budget</title></entry></feed>".to_string())
///     }
/// }
///
/// let service = SpreadsheetService::new(Canned, ServiceConfig::default());
/// let feed = service.spreadsheets().unwrap();
/// assert_eq!(feed.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SpreadsheetService<S> {
    executor: S,
    config: ServiceConfig,
}

impl<S: ServiceRequest> SpreadsheetService<S> {
    pub fn new(executor: S, config: ServiceConfig) -> Self {
        Self { executor, config }
    }

    /// The executor, for passing to [`Spreadsheet`] and
    /// [`Worksheet`](crate::Worksheet) operations
    pub fn executor(&self) -> &S {
        &self.executor
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetch the spreadsheets feed
    pub fn spreadsheets(&self) -> SheetsResult<SpreadsheetFeed> {
        let request = Request::new(self.config.spreadsheets_feed_url.as_str());
        tracing::debug!("Listing spreadsheets at {}", request.url());

        let body = self.executor.execute(&request)?;
        SpreadsheetFeed::from_xml(&body)
    }

    /// Fetch the spreadsheets feed and pick the first spreadsheet with this
    /// exact title
    pub fn spreadsheet_by_title(&self, title: &str) -> SheetsResult<Option<Spreadsheet>> {
        Ok(self.spreadsheets()?.by_title(title))
    }
}

#[cfg(feature = "http")]
impl SpreadsheetService<crate::http::HttpServiceRequest> {
    /// Create a service backed by the blocking HTTP executor
    pub fn with_http(config: ServiceConfig) -> SheetsResult<Self> {
        let executor = crate::http::HttpServiceRequest::new(&config)?;
        Ok(Self::new(executor, config))
    }
}
