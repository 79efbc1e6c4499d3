//! Per-verb body rules.
//!
//! Read-family verbs render an `<object>` element followed by a fixed,
//! ordered subset of the caller's arguments. Each such verb has a candidate
//! list (what may appear, in output order) and a required list (what always
//! appears, even when empty).
//!
//! | Verb | Candidates | Required |
//! |------|------------|----------|
//! | `read`, `readByName` | `keys`, `fields` | `keys` |
//! | `readByQuery`, `readMore` | `fields`, `query`, `pagesize`, `docparid` | `query` |
//! | `delete` | `keys` | none, or `keys` in strict mode |
//!
//! Write-family verbs render every argument inside an entity record, except
//! for transactional documents, which have their own create element.

use intacct_model::{ArgumentValue, Arguments, Verb, VerbFamily};

use crate::error::{IntacctError, IntacctResult};

/// Candidate and required argument keys for a read-family verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPolicy {
    /// Keys that may appear, in output order.
    pub candidates: &'static [&'static str],
    /// Keys that always appear. Always a subset of `candidates`.
    pub required: &'static [&'static str],
}

const READ_BY_KEY: ReadPolicy = ReadPolicy {
    candidates: &["keys", "fields"],
    required: &["keys"],
};

const READ_BY_QUERY: ReadPolicy = ReadPolicy {
    candidates: &["fields", "query", "pagesize", "docparid"],
    required: &["query"],
};

const DELETE: ReadPolicy = ReadPolicy {
    candidates: &["keys"],
    required: &[],
};

const DELETE_STRICT: ReadPolicy = ReadPolicy {
    candidates: &["keys"],
    required: &["keys"],
};

/// Entity types whose `create` uses a dedicated element.
const TRANSACTION_CREATE_ELEMENTS: &[(&str, &str)] = &[("sodocument", "create_sotransaction")];

impl ReadPolicy {
    /// Look up the policy for a verb. Returns `None` for write-family verbs.
    #[must_use]
    pub fn for_verb(verb: Verb, strict_delete_keys: bool) -> Option<Self> {
        match verb {
            Verb::Read | Verb::ReadByName => Some(READ_BY_KEY),
            Verb::ReadByQuery | Verb::ReadMore => Some(READ_BY_QUERY),
            Verb::Delete if strict_delete_keys => Some(DELETE_STRICT),
            Verb::Delete => Some(DELETE),
            Verb::Create | Verb::Update => None,
        }
    }

    /// Select and normalize the caller's arguments under this policy.
    pub fn select(&self, arguments: &Arguments) -> IntacctResult<Arguments> {
        select_read_arguments(arguments, self.candidates, self.required)
    }
}

/// How a function body is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    /// `<verb><object>entity</object>…selected arguments…</verb>`.
    Read(ReadPolicy),
    /// `<verb><ENTITY>…all arguments…</ENTITY></verb>`.
    Record,
    /// `<element>…all arguments…</element>` directly under `<function>`.
    Transaction(&'static str),
}

impl BodyShape {
    /// Determine the body layout for a verb and entity type.
    #[must_use]
    pub fn resolve(verb: Verb, entity_type: &str, strict_delete_keys: bool) -> Self {
        match verb.family() {
            VerbFamily::Read => ReadPolicy::for_verb(verb, strict_delete_keys)
                .map_or(Self::Record, Self::Read),
            VerbFamily::Write => TRANSACTION_CREATE_ELEMENTS
                .iter()
                .find(|(entity, _)| verb == Verb::Create && *entity == entity_type)
                .map_or(Self::Record, |(_, element)| Self::Transaction(*element)),
        }
    }
}

/// Normalize a read argument for inclusion.
///
/// Absent, null and empty values normalize to `None`. Sequences of scalars
/// are joined with commas; other scalars pass through unchanged.
pub fn normalize_read_value(
    key: &str,
    value: Option<&ArgumentValue>,
) -> IntacctResult<Option<String>> {
    let normalized = match value {
        None | Some(ArgumentValue::Null) => String::new(),
        Some(ArgumentValue::Scalar(s)) => s.clone(),
        Some(ArgumentValue::Sequence(items)) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    ArgumentValue::Scalar(s) => parts.push(s.as_str()),
                    ArgumentValue::Null => parts.push(""),
                    other => {
                        return Err(IntacctError::UnsupportedValueType {
                            type_name: other.type_name(),
                            context: format!("list for read argument '{key}'"),
                        });
                    }
                }
            }
            parts.join(",")
        }
        Some(other @ ArgumentValue::Mapping(_)) => {
            return Err(IntacctError::UnsupportedValueType {
                type_name: other.type_name(),
                context: format!("read argument '{key}'"),
            });
        }
    };

    Ok((!normalized.is_empty()).then_some(normalized))
}

/// Pick `candidates` out of `arguments`, in candidate order.
///
/// A candidate is kept when its normalized value is non-empty, or when it is
/// listed in `required`, in which case a missing value becomes `""`.
pub fn select_read_arguments(
    arguments: &Arguments,
    candidates: &[&str],
    required: &[&str],
) -> IntacctResult<Arguments> {
    let mut selected = Arguments::new();
    for &key in candidates {
        match normalize_read_value(key, arguments.get(key))? {
            Some(value) => {
                selected.insert(key, value);
            }
            None if required.contains(&key) => {
                selected.insert(key, "");
            }
            None => tracing::trace!(key, "omitting empty read argument"),
        }
    }
    Ok(selected)
}
