//! Encoding argument values as Intacct XML elements.
//!
//! Every mapping key becomes one element, in mapping order. Element names are
//! derived through a caller-supplied function so the same encoder serves both
//! case-preserving and upper-casing conventions (see [`TagCase`]).
//!
//! - Scalars: escaped text content
//! - Null: empty content
//! - Mappings: one child element per key
//! - Sequences: each record's elements repeated as siblings, no wrapper

use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use intacct_model::{ArgumentValue, Arguments};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::XmlError;

/// Casing applied to argument keys when they become element names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCase {
    /// Keep keys exactly as given.
    #[default]
    Preserve,
    /// Upper-case every key, including nested ones.
    Upper,
}

impl TagCase {
    /// Derive the element name for an argument key.
    #[must_use]
    pub fn apply<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match self {
            Self::Preserve => Cow::Borrowed(key),
            Self::Upper => Cow::Owned(key.to_uppercase()),
        }
    }

    /// Returns the configuration name of this convention.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Upper => "upper",
        }
    }
}

impl fmt::Display for TagCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagCase {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "upper" => Ok(Self::Upper),
            _ => Err(XmlError::ParseError(format!(
                "invalid tag case '{s}', expected 'preserve' or 'upper'"
            ))),
        }
    }
}

/// Derives an element name from an argument key.
///
/// Implemented by [`TagCase`] and by any `Fn(&str) -> Cow<str>`.
pub trait TagNamer {
    /// Element name for `key`.
    fn tag_name<'a>(&self, key: &'a str) -> Cow<'a, str>;
}

impl TagNamer for TagCase {
    fn tag_name<'a>(&self, key: &'a str) -> Cow<'a, str> {
        self.apply(key)
    }
}

impl<F> TagNamer for F
where
    F: Fn(&str) -> Cow<'_, str>,
{
    fn tag_name<'a>(&self, key: &'a str) -> Cow<'a, str> {
        self(key)
    }
}

// ---------------------------------------------------------------------------
// Writer-level encoding
// ---------------------------------------------------------------------------

/// Whether `name` can be used as an element name.
///
/// Names start with a letter or `_` and continue with letters, digits,
/// `_`, `-` or `.`. Namespace prefixes are not accepted.
#[must_use]
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

pub(crate) fn check_element_name(name: &str) -> Result<(), XmlError> {
    if is_valid_element_name(name) {
        Ok(())
    } else {
        Err(XmlError::InvalidElementName(name.to_owned()))
    }
}

/// Write `<tag>` and `</tag>` around whatever `body` writes.
///
/// Empty bodies still produce an explicit start/end pair. Fails with
/// [`XmlError::InvalidElementName`] before writing anything if `tag` is not
/// a legal element name.
pub fn write_element<W, B>(
    writer: &mut Writer<W>,
    tag: &str,
    body: B,
) -> Result<(), XmlError>
where
    W: Write,
    B: FnOnce(&mut Writer<W>) -> Result<(), XmlError>,
{
    check_element_name(tag)?;
    tracing::trace!(tag, "writing element");
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write a simple `<tag>text</tag>` element with escaped text.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), XmlError> {
    write_element(writer, tag, |w| {
        w.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    })
}

/// Write one element per mapping key, in mapping order.
pub fn write_mapping<W, N>(
    writer: &mut Writer<W>,
    mapping: &Arguments,
    namer: &N,
) -> Result<(), XmlError>
where
    W: Write,
    N: TagNamer + ?Sized,
{
    for (key, value) in mapping.iter() {
        let tag = namer.tag_name(key);
        write_element(writer, &tag, |w| write_value_in(w, value, namer, &tag))?;
    }
    Ok(())
}

/// Write the content of a single value (no enclosing element).
pub fn write_value<W, N>(
    writer: &mut Writer<W>,
    value: &ArgumentValue,
    namer: &N,
) -> Result<(), XmlError>
where
    W: Write,
    N: TagNamer + ?Sized,
{
    write_value_in(writer, value, namer, "value")
}

fn write_value_in<W, N>(
    writer: &mut Writer<W>,
    value: &ArgumentValue,
    namer: &N,
    parent: &str,
) -> Result<(), XmlError>
where
    W: Write,
    N: TagNamer + ?Sized,
{
    match value {
        ArgumentValue::Scalar(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        ArgumentValue::Null => {}
        ArgumentValue::Mapping(mapping) => write_mapping(writer, mapping, namer)?,
        ArgumentValue::Sequence(records) => {
            for record in records {
                let ArgumentValue::Mapping(mapping) = record else {
                    return Err(XmlError::UnsupportedValueType {
                        type_name: record.type_name(),
                        context: format!("sequence under <{parent}>"),
                    });
                };
                write_mapping(writer, mapping, namer)?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// String rendering
// ---------------------------------------------------------------------------

/// Render a mapping as a string of sibling elements.
///
/// # Examples
///
/// ```
/// use intacct_model::Arguments;
/// use intacct_xml::{TagCase, render_mapping};
///
/// let args = Arguments::new()
///     .with("name", "Acme")
///     .with("address", Arguments::new().with("city", "Reno"));
/// let xml = render_mapping(&args, &TagCase::Preserve).unwrap();
/// assert_eq!(xml, "<name>Acme</name><address><city>Reno</city></address>");
/// ```
pub fn render_mapping<N>(mapping: &Arguments, namer: &N) -> Result<String, XmlError>
where
    N: TagNamer + ?Sized,
{
    let mut writer = Writer::new(Vec::with_capacity(256));
    write_mapping(&mut writer, mapping, namer)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render the content of a single value as a string.
pub fn render_value<N>(value: &ArgumentValue, namer: &N) -> Result<String, XmlError>
where
    N: TagNamer + ?Sized,
{
    let mut writer = Writer::new(Vec::with_capacity(128));
    write_value(&mut writer, value, namer)?;
    Ok(String::from_utf8(writer.into_inner())?)
}
