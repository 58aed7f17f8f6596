//! Atom feeds of spreadsheets and worksheets

use gsheets_atom::{AtomDocument, Element};

use crate::error::SheetsResult;
use crate::spreadsheet::Spreadsheet;
use crate::worksheet::Worksheet;

fn entry_documents(feed: &AtomDocument) -> impl Iterator<Item = AtomDocument> + '_ {
    feed.root()
        .children_named("entry")
        .cloned()
        .map(AtomDocument::from_element)
}

fn title_matches(entry: &Element, title: &str) -> bool {
    entry.child_text("title").map_or(false, |t| t == title)
}

/// The worksheets of one spreadsheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetFeed {
    xml: AtomDocument,
}

impl WorksheetFeed {
    /// Parse a worksheets feed from a raw response body
    pub fn from_xml(xml: &str) -> SheetsResult<Self> {
        Ok(Self::from_document(AtomDocument::parse(xml)?))
    }

    pub fn from_document(xml: AtomDocument) -> Self {
        Self { xml }
    }

    pub fn xml(&self) -> &AtomDocument {
        &self.xml
    }

    /// All worksheets, in document order
    pub fn worksheets(&self) -> Vec<Worksheet> {
        entry_documents(&self.xml).map(Worksheet::from_document).collect()
    }

    pub fn len(&self) -> usize {
        self.xml.root().children_named("entry").count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First worksheet whose title equals `title` exactly
    pub fn by_title(&self, title: &str) -> Option<Worksheet> {
        self.xml
            .root()
            .children_named("entry")
            .find(|entry| title_matches(entry, title))
            .map(|entry| Worksheet::from_document(AtomDocument::from_element(entry.clone())))
    }

    /// First worksheet with this id (e.g. `od6`)
    pub fn by_id(&self, id: &str) -> Option<Worksheet> {
        self.worksheets()
            .into_iter()
            .find(|worksheet| worksheet.id().map_or(false, |i| i == id))
    }
}

impl IntoIterator for WorksheetFeed {
    type Item = Worksheet;
    type IntoIter = std::vec::IntoIter<Worksheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.worksheets().into_iter()
    }
}

/// The spreadsheets visible to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetFeed {
    xml: AtomDocument,
}

impl SpreadsheetFeed {
    /// Parse a spreadsheets feed from a raw response body
    pub fn from_xml(xml: &str) -> SheetsResult<Self> {
        Ok(Self::from_document(AtomDocument::parse(xml)?))
    }

    pub fn from_document(xml: AtomDocument) -> Self {
        Self { xml }
    }

    pub fn xml(&self) -> &AtomDocument {
        &self.xml
    }

    /// All spreadsheets, in document order
    pub fn spreadsheets(&self) -> Vec<Spreadsheet> {
        entry_documents(&self.xml)
            .map(Spreadsheet::from_document)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.xml.root().children_named("entry").count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First spreadsheet whose title equals `title` exactly
    pub fn by_title(&self, title: &str) -> Option<Spreadsheet> {
        self.xml
            .root()
            .children_named("entry")
            .find(|entry| title_matches(entry, title))
            .map(|entry| Spreadsheet::from_document(AtomDocument::from_element(entry.clone())))
    }
}

impl IntoIterator for SpreadsheetFeed {
    type Item = Spreadsheet;
    type IntoIter = std::vec::IntoIter<Spreadsheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.spreadsheets().into_iter()
    }
}
