//! Atom entry bodies for create/update requests

use crate::ATOM_NS;

/// Builds a flat Atom `<entry>` document.
///
/// Field text is XML-escaped, so titles containing `<`, `&` or quotes
/// produce a well-formed body.
///
/// ```rust
/// use gsheets_atom::{EntryBuilder, GS_NS};
///
/// let body = EntryBuilder::new()
///     .namespace("gs", GS_NS)
///     .field("title", "Q1 & Q2")
///     .field("gs:rowCount", 50)
///     .build();
/// assert!(body.contains("<title>Q1 &amp; Q2</title>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryBuilder {
    namespaces: Vec<(String, String)>,
    fields: Vec<(String, String)>,
}

impl EntryBuilder {
    /// Create an empty entry in the Atom namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an extension namespace prefix on the entry
    pub fn namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces.push((prefix.into(), uri.into()));
        self
    }

    /// Append a child element with text content
    pub fn field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((name.into(), value.to_string()));
        self
    }

    /// Render the entry document
    pub fn build(&self) -> String {
        let mut content = String::new();
        content.push_str(&format!("<entry xmlns=\"{}\"", ATOM_NS));
        for (prefix, uri) in &self.namespaces {
            content.push_str(&format!(" xmlns:{}=\"{}\"", prefix, escape_xml(uri)));
        }
        content.push('>');

        for (name, value) in &self.fields {
            content.push_str(&format!("<{name}>{}</{name}>", escape_xml(value)));
        }

        content.push_str("</entry>");
        content
    }
}

fn escape_xml(s: &str) -> std::borrow::Cow<'_, str> {
    quick_xml::escape::escape(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AtomDocument, GS_NS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_worksheet_entry() {
        let body = EntryBuilder::new()
            .namespace("gs", GS_NS)
            .field("title", "My Sheet")
            .field("gs:rowCount", 50)
            .field("gs:colCount", 5)
            .build();

        assert_eq!(
            body,
            "<entry xmlns=\"http://www.w3.org/2005/Atom\" \
             xmlns:gs=\"http://schemas.google.com/spreadsheets/2006\">\
             <title>My Sheet</title>\
             <gs:rowCount>50</gs:rowCount>\
             <gs:colCount>5</gs:colCount>\
             </entry>"
        );
    }

    #[test]
    fn test_escaped_text_round_trips() {
        let title = "<b>\"Tom\" & 'Jerry'</b>";
        let body = EntryBuilder::new().field("title", title).build();

        let doc = AtomDocument::parse(&body).unwrap();
        assert_eq!(doc.root().children().len(), 1);
        assert_eq!(doc.root().child_text("title").unwrap(), title);
    }
}
