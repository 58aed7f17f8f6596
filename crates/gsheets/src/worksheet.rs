//! A single worksheet entry

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use gsheets_atom::{parse_timestamp, AtomDocument, AtomError};

use crate::error::{SheetsError, SheetsResult};
use crate::request::{Method, Request, ServiceRequest};

/// Relation of the link to a worksheet's list (row-oriented) feed
pub const REL_LIST_FEED: &str = "http://schemas.google.com/spreadsheets/2006#listfeed";

/// Relation of the link to a worksheet's cells feed
pub const REL_CELLS_FEED: &str = "http://schemas.google.com/spreadsheets/2006#cellsfeed";

/// Relation of the link used to modify or delete an entry
pub const REL_EDIT: &str = "edit";

/// A worksheet, backed by its Atom `<entry>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    xml: AtomDocument,
}

impl Worksheet {
    /// Parse a worksheet entry from a raw response body
    pub fn from_xml(xml: &str) -> SheetsResult<Self> {
        Ok(Self::from_document(AtomDocument::parse(xml)?))
    }

    /// Wrap an already parsed entry
    pub fn from_document(xml: AtomDocument) -> Self {
        Self { xml }
    }

    pub fn xml(&self) -> &AtomDocument {
        &self.xml
    }

    /// Worksheet id (last path segment of `<id>`, e.g. `od6`)
    pub fn id(&self) -> SheetsResult<&str> {
        let url = self.xml.root().child_text("id")?;
        Ok(url.rsplit('/').next().unwrap_or(url))
    }

    pub fn title(&self) -> SheetsResult<&str> {
        Ok(self.xml.root().child_text("title")?)
    }

    pub fn updated(&self) -> SheetsResult<DateTime<FixedOffset>> {
        Ok(parse_timestamp(self.xml.root().child_text("updated")?)?)
    }

    /// Number of rows (`gs:rowCount`)
    pub fn row_count(&self) -> SheetsResult<u32> {
        self.count("rowCount")
    }

    /// Number of columns (`gs:colCount`)
    pub fn col_count(&self) -> SheetsResult<u32> {
        self.count("colCount")
    }

    pub fn edit_url(&self) -> SheetsResult<&str> {
        Ok(self.xml.root().link_href(REL_EDIT)?)
    }

    pub fn list_feed_url(&self) -> SheetsResult<&str> {
        Ok(self.xml.root().link_href(REL_LIST_FEED)?)
    }

    pub fn cells_feed_url(&self) -> SheetsResult<&str> {
        Ok(self.xml.root().link_href(REL_CELLS_FEED)?)
    }

    /// Delete this worksheet on the server
    pub fn delete<S>(&self, service: &S) -> SheetsResult<()>
    where
        S: ServiceRequest + ?Sized,
    {
        let request = Request::new(self.edit_url()?).with_method(Method::Delete);
        tracing::debug!("Deleting worksheet at {}", request.url());

        service.execute(&request)?;
        Ok(())
    }

    fn count(&self, local: &str) -> SheetsResult<u32> {
        let text = self.xml.root().child_text(local)?;
        text.trim().parse().map_err(|source| {
            SheetsError::from(AtomError::Integer {
                value: text.to_string(),
                source,
            })
        })
    }
}

impl FromStr for Worksheet {
    type Err = SheetsError;

    fn from_str(s: &str) -> SheetsResult<Self> {
        Self::from_xml(s)
    }
}

impl From<AtomDocument> for Worksheet {
    fn from(xml: AtomDocument) -> Self {
        Self::from_document(xml)
    }
}
