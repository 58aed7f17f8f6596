//! Owned element tree for Atom entries and feeds

use std::fmt;
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{AtomError, AtomResult};

/// A single XML element.
///
/// Names are stored exactly as written in the document (`gs:rowCount`,
/// `title`). Lookup helpers match on the local part, so an Atom element
/// in the default namespace and one with an explicit `atom:` prefix are
/// found the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> AtomResult<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Qualified name, including any prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &str {
        match self.name.rsplit_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Namespace prefix, if the name carries one
    pub fn prefix(&self) -> Option<&str> {
        self.name.rsplit_once(':').map(|(prefix, _)| prefix)
    }

    /// Value of the attribute with exactly this (qualified) name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Direct child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Direct children with the given local name
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |child| child.local_name() == local)
    }

    /// First direct child with the given local name
    pub fn child(&self, local: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.local_name() == local)
    }

    /// Character data directly inside this element, entities decoded.
    ///
    /// Whitespace is kept verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the first child with the given local name
    pub fn child_text(&self, local: &str) -> AtomResult<&str> {
        self.child(local)
            .map(Element::text)
            .ok_or_else(|| AtomError::MissingField(local.to_string()))
    }

    /// `href` of the first `link` child whose `rel` equals `rel`
    pub fn link_href(&self, rel: &str) -> AtomResult<&str> {
        self.children_named("link")
            .find(|link| link.attribute("rel") == Some(rel))
            .and_then(|link| link.attribute("href"))
            .ok_or_else(|| AtomError::LinkNotFound(rel.to_string()))
    }
}

/// A parsed Atom document: one root element, usually `entry` or `feed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomDocument {
    root: Element,
}

impl AtomDocument {
    /// Parse an XML string.
    ///
    /// Fails on XML syntax errors, unclosed or mismatched tags, a missing
    /// root element, or more than one root element.
    pub fn parse(xml: &str) -> AtomResult<Self> {
        Self::parse_inner(xml).map_err(|e| {
            log::debug!("Rejected Atom document ({} bytes): {e}", xml.len());
            e
        })
    }

    fn parse_inner(xml: &str) -> AtomResult<Self> {
        let mut xml_reader = Reader::from_str(xml);
        xml_reader.trim_text(false);
        xml_reader.check_end_names(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match xml_reader.read_event()? {
                Event::Start(e) => stack.push(Element::from_start(&e)?),
                Event::Empty(e) => {
                    let element = Element::from_start(&e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| AtomError::malformed("closing tag without opening tag"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(e) => match stack.last_mut() {
                    Some(current) => current.text.push_str(&e.unescape()?),
                    None => {
                        if !e.iter().all(u8::is_ascii_whitespace) {
                            return Err(AtomError::malformed("text outside the root element"));
                        }
                    }
                },
                Event::CData(e) => match stack.last_mut() {
                    Some(current) => current.text.push_str(std::str::from_utf8(&e)?),
                    None => return Err(AtomError::malformed("CDATA outside the root element")),
                },
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(AtomError::malformed(format!(
                "unclosed element <{}>",
                open.name
            )));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| AtomError::malformed("document has no root element"))
    }

    /// Wrap an element (for example an `entry` taken from a feed) as a
    /// standalone document
    pub fn from_element(root: Element) -> Self {
        Self { root }
    }

    /// The root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Consume the document and return its root element
    pub fn into_root(self) -> Element {
        self.root
    }
}

impl FromStr for AtomDocument {
    type Err = AtomError;

    fn from_str(s: &str) -> AtomResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> AtomResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(AtomError::malformed(format!(
                "second root element <{}>",
                element.name
            )))
        }
        None => *root = Some(element),
    }
    Ok(())
}
