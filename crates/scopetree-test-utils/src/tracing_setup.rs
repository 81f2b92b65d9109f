//! Tracing initialisation helpers for tests.
//!
//! Call [`init_test_tracing`] at the top of any test that mutates context
//! trees and wants their trace events captured by the test harness.
//!
//! The subscriber is initialised at most once per process (idempotent), so it
//! is safe to call from every test function.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: verbose for the workspace crates,
/// quiet for everything else.
pub const DEFAULT_TEST_FILTER: &str = "warn,scopetree_core=trace,scopetree_config=debug";

/// Initialise a tracing subscriber that writes to the test-harness writer.
///
/// `RUST_LOG` wins when set; otherwise [`DEFAULT_TEST_FILTER`] applies.
/// Subsequent calls are silently ignored.
///
/// # Example
///
/// ```ignore
/// #[test]
/// fn my_test() {
///     scopetree_test_utils::tracing_setup::init_test_tracing();
///     let mut context = scopetree_core::Context::new();
///     context.put("a", "b").unwrap();
/// }
/// ```
pub fn init_test_tracing() {
    init_test_tracing_with(DEFAULT_TEST_FILTER);
}

/// Like [`init_test_tracing`], with an explicit fallback filter.
pub fn init_test_tracing_with(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
