//! A single key/value attribute in transit.
//!
//! Collaborators that discover or provide attributes hand them over as
//! [`AttributeEntry`] values, and [`Context::apply`](crate::Context::apply)
//! stores them. Either field may be left unset, in which case it acts as a
//! wildcard when that entry is the left-hand side of a comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One attribute key/value pair.
///
/// Equality is a pattern match driven by the left-hand side: an unset field
/// on `self` matches anything, an unset field on `other` only matches an
/// unset field. So `AttributeEntry::with_key("role") == entry` holds for every
/// entry whose key is `"role"`, while `entry == AttributeEntry::with_key("role")`
/// holds only if `entry.value` is unset too. The relation is neither
/// symmetric nor transitive, hence no `Eq` or `Hash`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AttributeEntry {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl AttributeEntry {
    /// Create an entry with both fields set.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// Create a pattern entry that only constrains the key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// `pattern` unset matches anything; otherwise both must hold the same text.
fn field_matches(pattern: &Option<String>, candidate: &Option<String>) -> bool {
    pattern
        .as_ref()
        .is_none_or(|expected| Some(expected) == candidate.as_ref())
}

impl PartialEq for AttributeEntry {
    fn eq(&self, other: &Self) -> bool {
        field_matches(&self.key, &other.key) && field_matches(&self.value, &other.value)
    }
}

/// Renders `key=value`, with `*` standing in for an unset field.
impl fmt::Display for AttributeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.key.as_deref().unwrap_or("*"),
            self.value.as_deref().unwrap_or("*")
        )
    }
}
