//! Integration tests for multi-level context trees.

use pretty_assertions::assert_eq;
use scopetree_core::{AttributeEntry, Context, ContextError, ErrorKind, Member};
use scopetree_test_utils::TestContextBuilder;
use scopetree_test_utils::tracing_setup::init_test_tracing;

fn service_tree() -> Context {
    TestContextBuilder::new()
        .value("service", "billing")
        .child("db", |db| {
            db.value("host", "localhost")
                .value("port", "5432")
                .child("replica", |r| r.value("host", "replica.local"))
        })
        .child("cache", |c| c.value("ttl", "60"))
        .build()
}

#[test]
fn test_builder_produces_expected_shape() {
    let tree = service_tree();
    assert_eq!(tree.keys().iter().collect::<Vec<_>>(), vec!["service"]);
    assert_eq!(
        tree.children().names().collect::<Vec<_>>(),
        vec!["cache", "db"]
    );
    let replica = tree.child("db").and_then(|db| db.child("replica")).unwrap();
    assert_eq!(replica.get("host"), Some("replica.local"));
}

#[test_log::test]
fn test_sibling_nodes_have_independent_namespaces() {
    let mut tree = service_tree();
    // "host" is a key under db; a sibling may use it as a child name.
    tree.child_mut("cache").unwrap().create_child("host").unwrap();
    assert_eq!(tree.child("db").unwrap().get("host"), Some("localhost"));
    assert!(tree.child("cache").unwrap().child("host").is_some());
}

#[test]
fn test_removing_subtree_drops_descendants() {
    init_test_tracing();
    let mut tree = service_tree();
    let Some(Member::Child(db)) = tree.remove("db") else {
        panic!("db should have been a child");
    };
    assert_eq!(db.child("replica").unwrap().get("host"), Some("replica.local"));
    assert!(tree.child("db").is_none());
    assert_eq!(tree.children().len(), 1);
}

#[test]
fn test_failed_mutations_leave_tree_unchanged() {
    init_test_tracing();
    let mut tree = service_tree();
    let snapshot = tree.clone();

    let failures = [
        tree.put("db", "x").unwrap_err(),
        tree.put("a/b", "x").unwrap_err(),
        tree.put("", "x").unwrap_err(),
    ];
    assert_eq!(tree, snapshot);

    let child_failures = [
        tree.create_child("service").unwrap_err(),
        tree.create_child("db").unwrap_err(),
        tree.create_child("x/y").unwrap_err(),
        tree.create_child("").unwrap_err(),
    ];
    assert_eq!(tree, snapshot);

    let kinds: Vec<ErrorKind> = failures
        .iter()
        .chain(child_failures.iter())
        .map(ContextError::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidArgument,
            ErrorKind::MissingArgument,
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidArgument,
            ErrorKind::MissingArgument,
        ]
    );
}

#[test]
fn test_attributes_flow_between_nodes() {
    let source = service_tree();
    let mut target = Context::new();
    for entry in source.child("db").unwrap().attributes() {
        target.apply(&entry).unwrap();
    }
    assert_eq!(target.get("host"), Some("localhost"));
    assert_eq!(target.get("port"), Some("5432"));
    assert!(target.children().is_empty());

    let wanted = AttributeEntry::with_key("port");
    assert!(target.attributes().any(|entry| wanted == entry));
    assert!(!target.attributes().any(|entry| entry == wanted));
}

#[test]
fn test_deep_chain_of_children() {
    let mut root = Context::new();
    let mut node = &mut root;
    for depth in 0..32 {
        node = node.create_child(format!("level{depth}")).unwrap();
    }
    node.put("bottom", "reached").unwrap();

    let mut cursor = &root;
    for depth in 0..32 {
        cursor = cursor.child(&format!("level{depth}")).unwrap();
    }
    assert_eq!(cursor.get("bottom"), Some("reached"));
}
