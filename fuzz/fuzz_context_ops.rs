//! Fuzz target for sequences of context mutations.
//!
//! Run with: cargo +nightly fuzz run fuzz_context_ops
//!
//! Each input byte pair selects an operation and a name from a small alphabet
//! that includes the delimiter and the empty name. After every step the node's
//! key and child views must be disjoint and free of the delimiter.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scopetree_core::{Context, DELIMITER};

const NAMES: [&str; 6] = ["a", "b", "a/b", "", "c", "/"];

fuzz_target!(|data: &[u8]| {
    let mut context = Context::new();

    for pair in data.chunks_exact(2) {
        let name = NAMES[pair[1] as usize % NAMES.len()];
        let before = context.clone();
        let failed = match pair[0] % 3 {
            0 => context.put(name, "v").is_err(),
            1 => context.create_child(name).is_err(),
            _ => {
                context.remove(name);
                false
            }
        };
        if failed {
            assert_eq!(context, before, "failed operation mutated the node");
        }

        for key in context.keys() {
            assert!(!key.is_empty() && !key.contains(DELIMITER));
            assert!(!context.children().contains(key));
        }
        for name in context.children().names() {
            assert!(!name.is_empty() && !name.contains(DELIMITER));
        }
        assert_eq!(
            context.keys().len() + context.children().len(),
            context.len()
        );
    }
});
