//! Reading encoded Intacct XML fragments back into a generic element tree.
//!
//! The encoder's output has no declaration and may consist of several sibling
//! elements, so this reader works on fragments rather than documents. It is
//! used to inspect rendered functions and to check that encoded values
//! round-trip.

use intacct_model::{ArgumentValue, Arguments};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;
use crate::serialize::check_element_name;

/// An element read from an XML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Element name.
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    /// Concatenated, unescaped text content directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Returns the value of the named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v.as_str()))
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Iterate over all children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a `/`-separated path of child names, taking the first match at
    /// each step.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&XmlNode> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Names of the direct children, in order.
    #[must_use]
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Rebuild an argument value from this element's content.
    ///
    /// Leaf elements become scalars (empty elements become `""`). Children
    /// become a mapping; when a child name repeats, a new record starts, and
    /// the records are returned as a sequence. This inverts the encoder's
    /// repeated-record layout for records whose keys are unique.
    #[must_use]
    pub fn to_value(&self) -> ArgumentValue {
        if self.children.is_empty() {
            return ArgumentValue::Scalar(self.text.clone());
        }

        let mut records = vec![Arguments::new()];
        for child in &self.children {
            if records
                .last()
                .is_some_and(|record| record.contains_key(&child.name))
            {
                records.push(Arguments::new());
            }
            if let Some(record) = records.last_mut() {
                record.insert(child.name.clone(), child.to_value());
            }
        }

        if records.len() == 1 {
            ArgumentValue::Mapping(records.remove(0))
        } else {
            ArgumentValue::Sequence(records.into_iter().map(ArgumentValue::Mapping).collect())
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = start.name();
        let name = std::str::from_utf8(name.as_ref())
            .map_err(|e| XmlError::ParseError(e.to_string()))?
            .to_owned();
        check_element_name(&name)?;

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| XmlError::ParseError(e.to_string()))?
                .to_owned();
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|e| XmlError::ParseError(e.to_string()))?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(|e| XmlError::ParseError(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }
}

/// Parse a fragment that must contain exactly one root element.
///
/// # Examples
///
/// ```
/// use intacct_xml::parse_fragment;
///
/// let node = parse_fragment(r#"<function controlid="x"><read><object>a</object></read></function>"#)
///     .unwrap();
/// assert_eq!(node.attribute("controlid"), Some("x"));
/// assert_eq!(node.find("read/object").map(|n| n.text.as_str()), Some("a"));
/// ```
pub fn parse_fragment(xml: &str) -> Result<XmlNode, XmlError> {
    let mut nodes = parse_fragments(xml)?;
    match nodes.len() {
        1 => Ok(nodes.remove(0)),
        0 => Err(XmlError::MissingElement("root element".to_string())),
        n => Err(XmlError::UnexpectedElement(format!(
            "expected a single root element, found {n}"
        ))),
    }
}

/// Parse a fragment of zero or more sibling elements.
pub fn parse_fragments(xml: &str) -> Result<Vec<XmlNode>, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut nodes = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => nodes.push(read_element(&mut reader, &e)?),
            Event::Empty(e) => nodes.push(XmlNode::from_start(&e)?),
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                if !decoded.trim().is_empty() {
                    return Err(XmlError::UnexpectedElement(format!(
                        "text outside of an element: {decoded}"
                    )));
                }
            }
            Event::Eof => break,
            // Skip declarations, comments, processing instructions.
            _ => {}
        }
    }

    tracing::debug!(count = nodes.len(), "parsed XML fragments");
    Ok(nodes)
}

/// Read the content of an element whose start tag was just consumed,
/// through its matching end tag.
fn read_element(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<XmlNode, XmlError> {
    let mut node = XmlNode::from_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let child = read_element(reader, &e)?;
                node.children.push(child);
            }
            Event::Empty(e) => node.children.push(XmlNode::from_start(&e)?),
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                node.text.push_str(&unescaped);
            }
            Event::CData(e) => node.text.push_str(&String::from_utf8_lossy(&e)),
            Event::GeneralRef(e) => {
                let name = std::str::from_utf8(&e)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                node.text.push(resolve_reference(name)?);
            }
            Event::End(_) => return Ok(node),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF inside <{}>",
                    node.name
                )));
            }
            _ => {}
        }
    }
}

/// Resolve a predefined entity or character reference (without `&` and `;`).
fn resolve_reference(name: &str) -> Result<char, XmlError> {
    if let Some(code) = name.strip_prefix('#') {
        let parsed = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => code.parse::<u32>(),
        };
        return parsed
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| XmlError::ParseError(format!("invalid character reference &{name};")));
    }

    match name {
        "lt" => Ok('<'),
        "gt" => Ok('>'),
        "amp" => Ok('&'),
        "apos" => Ok('\''),
        "quot" => Ok('"'),
        _ => Err(XmlError::ParseError(format!("unknown entity &{name};"))),
    }
}
