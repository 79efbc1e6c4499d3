//! The function serializer.
//!
//! Output layout:
//!
//! ```xml
//! <function controlid="read-customer-2024-03-01 17:04:05 UTC">
//!   <read><object>customer</object><keys>1,2</keys></read>
//! </function>
//! ```
//!
//! (rendered without whitespace, declaration or namespace).

use std::io::Write;

use chrono::{DateTime, Utc};
use intacct_model::{Arguments, Verb};
use intacct_xml::{XmlError, write_element, write_mapping, write_text_element};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use tracing::debug;

use crate::config::SerializerConfig;
use crate::control::ControlId;
use crate::error::IntacctResult;
use crate::policy::BodyShape;

/// One Intacct API function: a verb applied to an entity type.
///
/// Immutable once constructed. The control id is fixed at construction, so
/// rendering the same instance twice yields identical XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    verb: Verb,
    entity_type: String,
    arguments: Arguments,
    created_at: DateTime<Utc>,
    control_id: ControlId,
}

/// A body ready to be written, after argument selection.
enum Body<'a> {
    Read(Arguments),
    Record(&'a Arguments),
    Transaction(&'static str, &'a Arguments),
}

impl Function {
    /// Create a function from a verb name.
    ///
    /// # Errors
    ///
    /// Returns [`IntacctError::UnsupportedVerb`](crate::IntacctError::UnsupportedVerb)
    /// if `verb` is not one of the accepted function types.
    pub fn new(
        verb: impl AsRef<str>,
        entity_type: impl Into<String>,
        arguments: Arguments,
    ) -> IntacctResult<Self> {
        let verb = verb.as_ref().parse::<Verb>()?;
        Ok(Self::from_verb(verb, entity_type, arguments))
    }

    /// Create a function from an already-validated verb, stamped with the
    /// current time.
    #[must_use]
    pub fn from_verb(verb: Verb, entity_type: impl Into<String>, arguments: Arguments) -> Self {
        Self::with_timestamp(verb, entity_type, arguments, Utc::now())
    }

    /// Create a function with an explicit creation timestamp.
    #[must_use]
    pub fn with_timestamp(
        verb: Verb,
        entity_type: impl Into<String>,
        arguments: Arguments,
        created_at: DateTime<Utc>,
    ) -> Self {
        let entity_type = entity_type.into();
        let control_id = ControlId::new(verb, &entity_type, &created_at);
        Self {
            verb,
            entity_type,
            arguments,
            created_at,
            control_id,
        }
    }

    /// The verb.
    #[must_use]
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// The target entity type.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The caller-supplied arguments.
    #[must_use]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// When this function was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The control id carried on the `<function>` element.
    #[must_use]
    pub fn control_id(&self) -> &ControlId {
        &self.control_id
    }

    /// Render with the default configuration.
    pub fn to_xml(&self) -> IntacctResult<String> {
        self.to_xml_with(&SerializerConfig::default())
    }

    /// Render the `<function>` element.
    ///
    /// Argument selection happens before anything is written, so a failure
    /// never yields partial output.
    pub fn to_xml_with(&self, config: &SerializerConfig) -> IntacctResult<String> {
        let body = self.plan(config)?;

        let mut writer = Writer::new(Vec::with_capacity(512));
        self.write_function(&mut writer, &body, config)?;
        let xml = String::from_utf8(writer.into_inner()).map_err(XmlError::from)?;

        debug!(
            verb = %self.verb,
            entity_type = %self.entity_type,
            control_id = %self.control_id,
            bytes = xml.len(),
            "rendered function"
        );
        Ok(xml)
    }

    fn plan(&self, config: &SerializerConfig) -> IntacctResult<Body<'_>> {
        let shape = BodyShape::resolve(self.verb, &self.entity_type, config.strict_delete_keys);
        Ok(match shape {
            BodyShape::Read(policy) => Body::Read(policy.select(&self.arguments)?),
            BodyShape::Record => Body::Record(&self.arguments),
            BodyShape::Transaction(element) => Body::Transaction(element, &self.arguments),
        })
    }

    fn write_function<W: Write>(
        &self,
        writer: &mut Writer<W>,
        body: &Body<'_>,
        config: &SerializerConfig,
    ) -> Result<(), XmlError> {
        let start =
            BytesStart::new("function").with_attributes([("controlid", self.control_id.as_str())]);
        writer.write_event(Event::Start(start))?;

        let namer = &config.tag_case;
        match body {
            Body::Read(selected) => write_element(writer, self.verb.as_str(), |w| {
                write_text_element(w, "object", &self.entity_type)?;
                write_mapping(w, selected, namer)
            })?,
            Body::Record(arguments) => write_element(writer, self.verb.as_str(), |w| {
                write_element(w, &self.entity_type.to_uppercase(), |w| {
                    write_mapping(w, arguments, namer)
                })
            })?,
            Body::Transaction(element, arguments) => {
                write_element(writer, element, |w| write_mapping(w, arguments, namer))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("function")))?;
        Ok(())
    }
}
