//! Error types for function serialization.

use intacct_model::ModelError;
use intacct_xml::XmlError;

/// Errors raised while building or rendering a function.
#[derive(Debug, thiserror::Error)]
pub enum IntacctError {
    /// The verb is not one of the functions the API accepts.
    #[error("function type {verb} not recognized, must be one of {allowed}")]
    UnsupportedVerb {
        /// The rejected verb.
        verb: String,
        /// Comma-separated list of accepted verbs.
        allowed: String,
    },

    /// An argument value has a shape that cannot be rendered where it appears.
    #[error("unsupported {type_name} value in {context}")]
    UnsupportedValueType {
        /// Type name of the offending value.
        type_name: &'static str,
        /// Where the value was found.
        context: String,
    },

    /// An argument key or entity type cannot be used as an element name.
    #[error("invalid element name {0:?}")]
    InvalidElementName(String),

    /// XML encoding failed.
    #[error("XML encoding failed: {0}")]
    Xml(XmlError),
}

/// Convenience result type for function serialization.
pub type IntacctResult<T> = Result<T, IntacctError>;

impl From<ModelError> for IntacctError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnsupportedVerb { verb, allowed } => Self::UnsupportedVerb { verb, allowed },
        }
    }
}

impl From<XmlError> for IntacctError {
    fn from(err: XmlError) -> Self {
        match err {
            XmlError::UnsupportedValueType { type_name, context } => {
                Self::UnsupportedValueType { type_name, context }
            }
            XmlError::InvalidElementName(name) => Self::InvalidElementName(name),
            other => Self::Xml(other),
        }
    }
}
