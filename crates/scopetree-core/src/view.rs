//! Borrowed, read-only views over a node's two namespaces.
//!
//! Both views filter the node's single member map by tag. They hold a shared
//! borrow of the node, so the node cannot change while a view is alive and
//! every view reflects the state at the time it was taken.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use crate::context::{Context, Member};

/// The keys stored at a node.
#[derive(Clone, Copy)]
pub struct Keys<'a> {
    members: &'a BTreeMap<String, Member>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(members: &'a BTreeMap<String, Member>) -> Self {
        Self { members }
    }

    /// Whether `key` names a value.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.members.get(key), Some(Member::Value(_)))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterate the keys in lexicographic order.
    pub fn iter(&self) -> KeysIter<'a> {
        KeysIter {
            inner: self.members.iter(),
        }
    }
}

impl<'a> IntoIterator for Keys<'a> {
    type Item = &'a str;
    type IntoIter = KeysIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Keys<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the keys of a node.
pub struct KeysIter<'a> {
    inner: btree_map::Iter<'a, String, Member>,
}

impl<'a> Iterator for KeysIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|(name, member)| match member {
            Member::Value(_) => Some(name.as_str()),
            Member::Child(_) => None,
        })
    }
}

/// The children attached to a node.
#[derive(Clone, Copy)]
pub struct Children<'a> {
    members: &'a BTreeMap<String, Member>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(members: &'a BTreeMap<String, Member>) -> Self {
        Self { members }
    }

    /// Whether `name` names a child.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The child registered under `name`.
    pub fn get(&self, name: &str) -> Option<&'a Context> {
        self.members.get(name).and_then(Member::as_child)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Child names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.iter().map(|(name, _)| name)
    }

    /// Iterate `(name, child)` pairs in lexicographic order.
    pub fn iter(&self) -> ChildrenIter<'a> {
        ChildrenIter {
            inner: self.members.iter(),
        }
    }
}

impl<'a> IntoIterator for Children<'a> {
    type Item = (&'a str, &'a Context);
    type IntoIter = ChildrenIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Iterator over the children of a node.
pub struct ChildrenIter<'a> {
    inner: btree_map::Iter<'a, String, Member>,
}

impl<'a> Iterator for ChildrenIter<'a> {
    type Item = (&'a str, &'a Context);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|(name, member)| match member {
            Member::Child(child) => Some((name.as_str(), child)),
            Member::Value(_) => None,
        })
    }
}
