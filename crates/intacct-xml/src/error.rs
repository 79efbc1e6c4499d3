//! XML error types.

use std::io;

/// Errors that can occur while encoding or reading Intacct XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The encoded output was not valid UTF-8.
    #[error("encoded XML is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A value has a shape that cannot be encoded where it appears.
    #[error("unsupported {type_name} value in {context}")]
    UnsupportedValueType {
        /// Type name of the offending value.
        type_name: &'static str,
        /// Element path where the value was found.
        context: String,
    },

    /// A tag name is not a legal XML element name.
    #[error("invalid XML element name: {0:?}")]
    InvalidElementName(String),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
