#![deny(unsafe_code)]

//! Hierarchical, namespaced key-value store.
//!
//! A [`Context`] is one node of a tree of named scopes. Every node owns a flat
//! mapping of string keys to string values and a set of uniquely named child
//! nodes. Keys and child names share a single namespace per node, and neither
//! may contain the path [`DELIMITER`].
//!
//! ```
//! use scopetree_core::Context;
//!
//! let mut root = Context::new();
//! root.put("service", "billing")?;
//! let db = root.create_child("db")?;
//! db.put("host", "localhost")?;
//!
//! assert_eq!(root.get("service"), Some("billing"));
//! assert_eq!(root.child("db").and_then(|db| db.get("host")), Some("localhost"));
//! assert!(root.put("db", "oops").is_err());
//! # Ok::<(), scopetree_core::ContextError>(())
//! ```

/// Transport record for a single key/value attribute.
pub mod attribute;
/// The context tree node and its error type.
pub mod context;
/// Read-only views over a node's keys and children.
pub mod view;

pub use attribute::AttributeEntry;
pub use context::{Context, ContextError, DELIMITER, ErrorKind, Member};
pub use view::{Children, Keys};
