//! Owned element tree for small XML documents.
//!
//! VLC's status document is a few kilobytes of loosely structured XML where
//! most lookups are "the first child named X" or "the child whose `name`
//! attribute is Y". Rather than mapping it onto rigid serde structs, the
//! document is read once into an [`XmlNode`] tree and queried through
//! accessors that return `None` instead of failing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ParseError, ParseResult};

/// A single element with its attributes, text content and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Element name, including any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute `key`, if present
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Unescaped text content, or `None` when the element has none
    pub fn text(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// All direct children with the given element name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First direct child with the given element name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of the first direct child with the given element name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(XmlNode::text)
    }

    /// First direct child named `name` whose attribute `attribute` equals `value`
    ///
    /// ```xml
    /// <category name="meta">...</category>
    /// ```
    pub fn find_child(&self, name: &str, attribute: &str, value: &str) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|child| child.name == name && child.attribute(attribute) == Some(value))
    }
}

/// Parse a complete XML document into its root element.
///
/// Leading/trailing whitespace of text content is trimmed. Declarations,
/// comments and processing instructions are skipped. The whole document is
/// validated: any error anywhere fails the parse, there is no partial tree.
pub fn parse(xml: &str) -> ParseResult<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut open: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader.read_event().map_err(|e| ParseError::Malformed {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => open.push(element(&start)?),
            Event::Empty(start) => attach(&mut open, &mut root, element(&start)?)?,
            Event::End(_) => {
                let node = open.pop().ok_or_else(|| ParseError::Malformed {
                    position: reader.buffer_position() as u64,
                    message: "closing tag without matching opening tag".to_string(),
                })?;
                attach(&mut open, &mut root, node)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| ParseError::Malformed {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
                push_text(&mut open, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)
                    .map_err(|e| ParseError::Encoding(e.to_string()))?;
                push_text(&mut open, text)?;
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(ParseError::UnclosedElement(unclosed.name));
    }

    root.ok_or(ParseError::NoRootElement)
}

fn element(start: &BytesStart<'_>) -> ParseResult<XmlNode> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| ParseError::Encoding(e.to_string()))?
        .to_string();

    let mut node = XmlNode::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| ParseError::InvalidAttribute(e.to_string()))?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| ParseError::Encoding(e.to_string()))?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| ParseError::InvalidAttribute(format!("{}: {}", key, e)))?
            .into_owned();
        node.attributes.push((key, value));
    }

    Ok(node)
}

fn attach(open: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> ParseResult<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_some() => return Err(ParseError::MultipleRootElements),
        None => *root = Some(node),
    }
    Ok(())
}

fn push_text(open: &mut [XmlNode], text: &str) -> ParseResult<()> {
    match open.last_mut() {
        Some(node) => node.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(ParseError::TextOutsideRoot),
    }
    Ok(())
}
