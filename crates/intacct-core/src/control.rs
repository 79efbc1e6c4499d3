//! Control ids correlating a function with its result.

use std::fmt;

use chrono::{DateTime, Utc};
use intacct_model::Verb;

/// Timestamp layout used inside control ids (`2024-03-01 17:04:05 UTC`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A control id of the form `{verb}-{entityType}-{timestamp}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId(String);

impl ControlId {
    /// Build the control id for a function created at `timestamp`.
    #[must_use]
    pub fn new(verb: Verb, entity_type: &str, timestamp: &DateTime<Utc>) -> Self {
        Self(format!(
            "{verb}-{entity_type}-{}",
            timestamp.format(TIMESTAMP_FORMAT)
        ))
    }

    /// Get the control id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
