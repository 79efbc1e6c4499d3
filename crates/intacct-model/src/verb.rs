//! Intacct function verbs.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// All functions accepted by the Intacct XML API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    // Queries
    /// Query records with a filter expression.
    ReadByQuery,
    /// Continue a previous `readByQuery` result set.
    ReadMore,
    /// Read records by key.
    Read,
    /// Read records by name.
    ReadByName,

    // Mutations
    /// Create a record.
    Create,
    /// Update a record.
    Update,
    /// Delete records by key.
    Delete,
}

/// Body layout shared by a group of verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbFamily {
    /// `<object>` element followed by filtered query arguments.
    Read,
    /// A single entity record holding every argument.
    Write,
}

impl Verb {
    /// Every accepted verb, in the order the API documents them.
    pub const ALL: [Self; 7] = [
        Self::ReadByQuery,
        Self::ReadMore,
        Self::Read,
        Self::ReadByName,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Returns the wire name of the verb.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadByQuery => "readByQuery",
            Self::ReadMore => "readMore",
            Self::Read => "read",
            Self::ReadByName => "readByName",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Parse a wire name into a `Verb`. Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "readByQuery" => Some(Self::ReadByQuery),
            "readMore" => Some(Self::ReadMore),
            "read" => Some(Self::Read),
            "readByName" => Some(Self::ReadByName),
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns the body layout this verb renders with.
    #[must_use]
    pub fn family(&self) -> VerbFamily {
        match self {
            Self::Read | Self::ReadByName | Self::ReadByQuery | Self::ReadMore | Self::Delete => {
                VerbFamily::Read
            }
            Self::Create | Self::Update => VerbFamily::Write,
        }
    }

    /// Comma-separated list of all wire names, used in error messages.
    #[must_use]
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnsupportedVerb {
            verb: s.to_owned(),
            allowed: Self::allowed_names(),
        })
    }
}
