//! Integration tests for the Intacct function serializer.
//!
//! These exercise the public API end to end: build a [`Function`], render it,
//! and read the XML back with the `intacct-xml` fragment reader.
//!
//! Run them with:
//! ```text
//! cargo test -p intacct-integration
//! ```

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use intacct_core::{Arguments, Function, SerializerConfig, Verb};
use intacct_xml::{XmlNode, parse_fragment};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Timestamp used for every function built by these tests.
#[must_use]
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 17, 4, 5)
        .single()
        .expect("valid timestamp")
}

/// Build a function from a verb name and JSON arguments.
pub fn function(verb: &str, entity: &str, args: serde_json::Value) -> anyhow::Result<Function> {
    init_tracing();
    let verb: Verb = verb.parse()?;
    let arguments: Arguments = serde_json::from_value(args)?;
    Ok(Function::with_timestamp(
        verb,
        entity,
        arguments,
        fixed_timestamp(),
    ))
}

/// Render a function and parse the result.
pub fn render(
    verb: &str,
    entity: &str,
    args: serde_json::Value,
    config: &SerializerConfig,
) -> anyhow::Result<(String, XmlNode)> {
    let xml = function(verb, entity, args)?.to_xml_with(config)?;
    tracing::debug!(%xml, "rendered");
    let node = parse_fragment(&xml)?;
    Ok((xml, node))
}

mod test_read_family;
mod test_roundtrip;
mod test_scenarios;
mod test_write_family;
