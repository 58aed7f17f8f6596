//! A single spreadsheet entry

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use gsheets_atom::{parse_timestamp, AtomDocument, EntryBuilder, GS_NS};

use crate::error::SheetsResult;
use crate::feed::WorksheetFeed;
use crate::request::{Method, Request, ServiceRequest};
use crate::worksheet::Worksheet;

/// Relation of the link pointing at a spreadsheet's worksheets feed
pub const REL_WORKSHEETS_FEED: &str = "http://schemas.google.com/spreadsheets/2006#worksheetsfeed";

/// Row count used by [`Spreadsheet::add_worksheet`]
pub const DEFAULT_ROW_COUNT: u32 = 100;

/// Column count used by [`Spreadsheet::add_worksheet`]
pub const DEFAULT_COL_COUNT: u32 = 10;

/// Content type of Atom request bodies
pub(crate) const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// A spreadsheet, backed by its Atom `<entry>`.
///
/// All accessors read the wrapped document on every call; a missing or
/// malformed element is reported by the accessor that needs it, never at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spreadsheet {
    xml: AtomDocument,
}

impl Spreadsheet {
    /// Parse a spreadsheet entry from raw XML
    pub fn from_xml(xml: &str) -> SheetsResult<Self> {
        Ok(Self::from_document(AtomDocument::parse(xml)?))
    }

    /// Wrap an already parsed entry
    pub fn from_document(xml: AtomDocument) -> Self {
        Self { xml }
    }

    /// The underlying entry document
    pub fn xml(&self) -> &AtomDocument {
        &self.xml
    }

    /// The spreadsheet key: the last path segment of `<id>`, not the full URL
    pub fn id(&self) -> SheetsResult<&str> {
        let url = self.xml.root().child_text("id")?;
        Ok(match url.rfind('/') {
            Some(pos) => &url[pos + 1..],
            None => url,
        })
    }

    /// Time of the last update
    pub fn updated(&self) -> SheetsResult<DateTime<FixedOffset>> {
        let text = self.xml.root().child_text("updated")?;
        Ok(parse_timestamp(text)?)
    }

    /// The title (name) of the spreadsheet, exactly as it appears in the
    /// document (whitespace is not trimmed)
    pub fn title(&self) -> SheetsResult<&str> {
        Ok(self.xml.root().child_text("title")?)
    }

    /// URL of the feed listing this spreadsheet's worksheets
    pub fn worksheets_feed_url(&self) -> SheetsResult<&str> {
        Ok(self.xml.root().link_href(REL_WORKSHEETS_FEED)?)
    }

    /// Fetch all worksheets belonging to this spreadsheet
    pub fn worksheets<S>(&self, service: &S) -> SheetsResult<WorksheetFeed>
    where
        S: ServiceRequest + ?Sized,
    {
        let request = Request::new(self.worksheets_feed_url()?);
        tracing::debug!("Listing worksheets of spreadsheet at {}", request.url());

        let body = service.execute(&request)?;
        WorksheetFeed::from_xml(&body)
    }

    /// Add a worksheet with the default size (100 rows, 10 columns)
    pub fn add_worksheet<S>(&self, service: &S, title: &str) -> SheetsResult<Worksheet>
    where
        S: ServiceRequest + ?Sized,
    {
        self.add_worksheet_with_size(service, title, DEFAULT_ROW_COUNT, DEFAULT_COL_COUNT)
    }

    /// Add a worksheet with the given size.
    ///
    /// Each call creates a new worksheet on the server.
    pub fn add_worksheet_with_size<S>(
        &self,
        service: &S,
        title: &str,
        row_count: u32,
        col_count: u32,
    ) -> SheetsResult<Worksheet>
    where
        S: ServiceRequest + ?Sized,
    {
        let entry = EntryBuilder::new()
            .namespace("gs", GS_NS)
            .field("title", title)
            .field("gs:rowCount", row_count)
            .field("gs:colCount", col_count)
            .build();

        let request = Request::new(self.worksheets_feed_url()?)
            .with_method(Method::Post)
            .with_body(entry)
            .with_header("Content-Type", ATOM_CONTENT_TYPE);
        tracing::debug!(
            "Adding worksheet '{}' ({}x{}) at {}",
            title,
            row_count,
            col_count,
            request.url()
        );

        let body = service.execute(&request)?;
        Worksheet::from_xml(&body)
    }
}

impl FromStr for Spreadsheet {
    type Err = crate::error::SheetsError;

    fn from_str(s: &str) -> SheetsResult<Self> {
        Self::from_xml(s)
    }
}

impl From<AtomDocument> for Spreadsheet {
    fn from(xml: AtomDocument) -> Self {
        Self::from_document(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom">
  <id>https://spreadsheets.google.com/feeds/spreadsheets/private/full/tFEgU8ywJkkjcZjG</id>
  <updated>2013-02-10T10:35:30.455Z</updated>
  <title type="text">Test Spreadsheet</title>
  <link rel="alternate" type="text/html" href="https://spreadsheets.google.com/ccc?key=tFEgU8ywJkkjcZjG"/>
  <link rel="http://schemas.google.com/spreadsheets/2006#worksheetsfeed" type="application/atom+xml" href="https://spreadsheets.google.com/feeds/worksheets/tFEgU8ywJkkjcZjG/private/full"/>
  <link rel="http://schemas.google.com/spreadsheets/2006#worksheetsfeed" type="application/atom+xml" href="https://example.com/second"/>
</entry>"#;

    #[test]
    fn test_id() {
        let spreadsheet = Spreadsheet::from_xml(ENTRY).unwrap();
        assert_eq!(spreadsheet.id().unwrap(), "tFEgU8ywJkkjcZjG");
    }

    #[test]
    fn test_id_without_slash() {
        let spreadsheet = Spreadsheet::from_xml("<entry><id>plainkey</id></entry>").unwrap();
        assert_eq!(spreadsheet.id().unwrap(), "plainkey");
    }

    #[test]
    fn test_updated() {
        let spreadsheet = Spreadsheet::from_xml(ENTRY).unwrap();
        assert_eq!(
            spreadsheet.updated().unwrap(),
            DateTime::parse_from_rfc3339("2013-02-10T10:35:30.455Z").unwrap()
        );
    }

    #[test]
    fn test_updated_unparsable() {
        let spreadsheet =
            Spreadsheet::from_xml("<entry><updated>last tuesday</updated></entry>").unwrap();
        let err = spreadsheet.updated().unwrap_err();
        assert!(err.is_parse_error());
        assert!(!err.is_missing_field());
    }

    #[test]
    fn test_title_verbatim() {
        let spreadsheet = Spreadsheet::from_xml(ENTRY).unwrap();
        assert_eq!(spreadsheet.title().unwrap(), "Test Spreadsheet");

        let padded = Spreadsheet::from_xml("<entry><title> Budget\n</title></entry>").unwrap();
        assert_eq!(padded.title().unwrap(), " Budget\n");
    }

    #[test]
    fn test_worksheets_feed_url_first_match() {
        let spreadsheet = Spreadsheet::from_xml(ENTRY).unwrap();
        assert_eq!(
            spreadsheet.worksheets_feed_url().unwrap(),
            "https://spreadsheets.google.com/feeds/worksheets/tFEgU8ywJkkjcZjG/private/full"
        );
    }

    #[test]
    fn test_missing_fields() {
        let spreadsheet = Spreadsheet::from_xml("<entry/>").unwrap();

        assert!(spreadsheet.id().unwrap_err().is_missing_field());
        assert!(spreadsheet.title().unwrap_err().is_missing_field());
        assert!(spreadsheet.updated().unwrap_err().is_missing_field());
        assert!(spreadsheet
            .worksheets_feed_url()
            .unwrap_err()
            .is_link_not_found());
    }

    #[test]
    fn test_malformed_xml() {
        let err = Spreadsheet::from_xml("<entry><id>abc</id>").unwrap_err();
        assert!(err.is_parse_error());

        assert!("<entry><title>x</entry>".parse::<Spreadsheet>().is_err());
    }

    #[test]
    fn test_from_document() {
        let doc = AtomDocument::parse(ENTRY).unwrap();
        let spreadsheet = Spreadsheet::from(doc.clone());
        assert_eq!(spreadsheet.xml(), &doc);
    }

    proptest! {
        #[test]
        fn prop_id_is_last_segment(
            prefix in "[a-z]{1,8}(/[a-z0-9]{1,8}){0,4}",
            key in "[A-Za-z0-9_-]{1,32}",
        ) {
            let xml = format!("<entry><id>https://{prefix}/{key}</id></entry>");
            let spreadsheet = Spreadsheet::from_xml(&xml).unwrap();
            prop_assert_eq!(spreadsheet.id().unwrap(), key.as_str());
        }
    }
}
