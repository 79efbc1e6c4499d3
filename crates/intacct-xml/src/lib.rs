//! XML encoding for Intacct argument values.
//!
//! This crate turns [`ArgumentValue`](intacct_model::ArgumentValue) trees into
//! the element-per-key XML the Intacct API expects, and reads such fragments
//! back into a generic tree for inspection.
//!
//! # Key components
//!
//! - [`render_mapping`] / [`render_value`] and their writer-level counterparts
//!   for encoding values
//! - [`TagCase`] for deriving element names from argument keys
//! - [`parse_fragment`] and [`XmlNode`] for reading encoded fragments back
//!
//! # Intacct XML conventions
//!
//! - One element per mapping key, in mapping order
//! - Sequences repeat their records as siblings with no wrapper element
//! - Empty values render as `<key></key>`, never as a self-closing tag
//! - No XML declaration and no namespace

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{XmlNode, parse_fragment, parse_fragments};
pub use error::XmlError;
pub use serialize::{
    TagCase, TagNamer, is_valid_element_name, render_mapping, render_value, write_element,
    write_mapping, write_text_element, write_value,
};
