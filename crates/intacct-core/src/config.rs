//! Serializer configuration.
//!
//! The remote API has been observed with two conventions for argument tag
//! casing and for whether `delete` requires `keys`. Both are configurable;
//! values are loaded from environment variables by [`SerializerConfig::from_env`].

use std::env;

use intacct_xml::TagCase;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Function serializer configuration.
///
/// # Examples
///
/// ```
/// use intacct_core::{SerializerConfig, TagCase};
///
/// let config = SerializerConfig::default();
/// assert_eq!(config.tag_case, TagCase::Preserve);
/// assert!(!config.strict_delete_keys);
///
/// let config = SerializerConfig::builder().tag_case(TagCase::Upper).build();
/// assert_eq!(config.tag_case, TagCase::Upper);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SerializerConfig {
    /// Casing applied to caller argument tag names.
    #[builder(default)]
    pub tag_case: TagCase,

    /// Always emit `<keys>` for `delete`, even when empty.
    #[builder(default = false)]
    pub strict_delete_keys: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            tag_case: TagCase::Preserve,
            strict_delete_keys: false,
        }
    }
}

impl SerializerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `INTACCT_TAG_CASE` | `preserve` |
    /// | `INTACCT_STRICT_DELETE_KEYS` | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// An unparseable `INTACCT_TAG_CASE` is logged and ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("INTACCT_TAG_CASE") {
            match v.parse() {
                Ok(tag_case) => config.tag_case = tag_case,
                Err(e) => {
                    tracing::warn!(value = %v, error = %e, "ignoring INTACCT_TAG_CASE");
                }
            }
        }
        config.strict_delete_keys = lookup("INTACCT_STRICT_DELETE_KEYS").is_some_and(|v| parse_bool(&v));

        config
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
