//! The context tree node.
//!
//! A [`Context`] stores its values and its children in one map keyed by name,
//! tagged by [`Member`]. A name therefore denotes either a value or a subtree,
//! never both.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{debug, trace};

use crate::attribute::AttributeEntry;
use crate::view::{Children, Keys};

/// Separator reserved for path addressing on top of the tree. Never valid
/// inside a key or child name.
pub const DELIMITER: char = '/';

/// Errors raised by mutating operations on a [`Context`].
///
/// Every error is a precondition violation detected before the node is
/// touched; a failed call leaves the node unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("{argument} must be provided")]
    MissingArgument { argument: &'static str },

    #[error("{argument} {name:?} must not contain the delimiter '/'")]
    ReservedDelimiter { argument: &'static str, name: String },

    #[error("{name:?} already names a child context")]
    ChildExists { name: String },

    #[error("{name:?} already names a value")]
    KeyExists { name: String },
}

/// Coarse classification of a [`ContextError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was absent or empty.
    MissingArgument,
    /// An argument was present but not acceptable at this node.
    InvalidArgument,
}

impl ContextError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::ReservedDelimiter { .. } | Self::ChildExists { .. } | Self::KeyExists { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// What a name resolves to inside a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// A plain string value.
    Value(String),
    /// An owned subtree.
    Child(Context),
}

impl Member {
    /// The value, if this member is one.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Child(_) => None,
        }
    }

    /// The subtree, if this member is one.
    pub fn as_child(&self) -> Option<&Context> {
        match self {
            Self::Child(child) => Some(child),
            Self::Value(_) => None,
        }
    }
}

/// A node of the context tree.
///
/// Children are owned exclusively by their parent. Removing a child detaches
/// and returns its whole subtree; dropping a node drops everything below it.
///
/// The node does no locking of its own. Callers sharing a tree across threads
/// must serialize access themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Context {
    pub(crate) members: BTreeMap<String, Member>,
}

impl Context {
    /// Create an empty context with no keys and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    ///
    /// Returns `None` when the key is absent or names a child.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.members.get(key).and_then(Member::as_value)
    }

    /// Insert or overwrite a value, returning the previous one.
    ///
    /// Fails if `key` is empty, contains [`DELIMITER`], or already names a
    /// child of this node.
    pub fn put(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, ContextError> {
        let key = key.into();
        validate_name("key", &key)?;
        let value = value.into();

        match self.members.entry(key) {
            Entry::Occupied(mut slot) => {
                if let Member::Value(current) = slot.get_mut() {
                    let previous = std::mem::replace(current, value);
                    trace!(key = %slot.key(), "overwrote value");
                    return Ok(Some(previous));
                }
                debug!(key = %slot.key(), "rejected put: name held by a child");
                Err(ContextError::ChildExists {
                    name: slot.key().clone(),
                })
            }
            Entry::Vacant(slot) => {
                trace!(key = %slot.key(), "stored value");
                slot.insert(Member::Value(value));
                Ok(None)
            }
        }
    }

    /// Remove whatever `name` denotes at this node.
    ///
    /// Values and children share one namespace, so at most one of them can
    /// match. Returns the detached member, or `None` if nothing was there.
    pub fn remove(&mut self, name: &str) -> Option<Member> {
        let removed = self.members.remove(name);
        if removed.is_some() {
            trace!(member = name, "removed member");
        }
        removed
    }

    /// Create an empty child named `name` and return it.
    ///
    /// Never overwrites: fails if `name` already denotes a child or a value,
    /// is empty, or contains [`DELIMITER`].
    pub fn create_child(&mut self, name: impl Into<String>) -> Result<&mut Context, ContextError> {
        let name = name.into();
        validate_name("name", &name)?;

        match self.members.entry(name) {
            Entry::Occupied(slot) => {
                let name = slot.key().clone();
                debug!(child = %name, "rejected create_child: name already taken");
                Err(match slot.get() {
                    Member::Child(_) => ContextError::ChildExists { name },
                    Member::Value(_) => ContextError::KeyExists { name },
                })
            }
            Entry::Vacant(slot) => {
                let name = slot.key().clone();
                trace!(child = %name, "created child");
                let Member::Child(child) = slot.insert(Member::Child(Context::new())) else {
                    return Err(ContextError::KeyExists { name });
                };
                Ok(child)
            }
        }
    }

    /// Look up a child by name.
    pub fn child(&self, name: &str) -> Option<&Context> {
        self.members.get(name).and_then(Member::as_child)
    }

    /// Look up a child by name for mutation.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Context> {
        match self.members.get_mut(name) {
            Some(Member::Child(child)) => Some(child),
            _ => None,
        }
    }

    /// Tagged lookup of a name in either namespace.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Whether `name` denotes a value or a child at this node.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Read-only view of the keys currently stored at this node.
    ///
    /// The view offers no way to change the node:
    ///
    /// ```compile_fail
    /// let mut context = scopetree_core::Context::new();
    /// context.put("a", "b").unwrap();
    /// context.keys().clear();
    /// ```
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(&self.members)
    }

    /// Read-only view of the children currently attached to this node.
    ///
    /// ```compile_fail
    /// let mut context = scopetree_core::Context::new();
    /// context.create_child("a").unwrap();
    /// context.children().remove("a");
    /// ```
    pub fn children(&self) -> Children<'_> {
        Children::new(&self.members)
    }

    /// Number of names at this node, values and children together.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the node holds neither values nor children.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Store the key/value pair carried by an [`AttributeEntry`].
    ///
    /// Both fields are required; a missing one is reported the same way as
    /// an empty key.
    pub fn apply(&mut self, entry: &AttributeEntry) -> Result<Option<String>, ContextError> {
        let key = entry
            .key
            .as_deref()
            .ok_or(ContextError::MissingArgument { argument: "key" })?;
        let value = entry
            .value
            .as_deref()
            .ok_or(ContextError::MissingArgument { argument: "value" })?;
        self.put(key, value)
    }

    /// This node's values as transport records, in key order.
    pub fn attributes(&self) -> impl Iterator<Item = AttributeEntry> + '_ {
        self.members.iter().filter_map(|(key, member)| {
            member
                .as_value()
                .map(|value| AttributeEntry::new(key.as_str(), value))
        })
    }
}

fn validate_name(argument: &'static str, name: &str) -> Result<(), ContextError> {
    if name.is_empty() {
        return Err(ContextError::MissingArgument { argument });
    }
    if name.contains(DELIMITER) {
        return Err(ContextError::ReservedDelimiter {
            argument,
            name: name.to_string(),
        });
    }
    Ok(())
}
