//! Context tree builders for tests.

use scopetree_core::Context;

/// Fluent builder for [`Context`] trees in tests.
///
/// Panics on any rejected insertion, so a fixture that violates the tree's
/// naming rules fails loudly at the point it is built.
///
/// # Example
///
/// ```ignore
/// let tree = TestContextBuilder::new()
///     .value("service", "billing")
///     .child("db", |db| db.value("host", "localhost"))
///     .build();
/// ```
pub struct TestContextBuilder {
    context: Context,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            context: Context::new(),
        }
    }

    pub fn value(mut self, key: &str, value: &str) -> Self {
        self.context
            .put(key, value)
            .unwrap_or_else(|e| panic!("fixture value {key:?} rejected: {e}"));
        self
    }

    pub fn child(mut self, name: &str, fill: impl FnOnce(Self) -> Self) -> Self {
        let built = fill(Self::new()).build();
        let child = self
            .context
            .create_child(name)
            .unwrap_or_else(|e| panic!("fixture child {name:?} rejected: {e}"));
        *child = built;
        self
    }

    pub fn build(self) -> Context {
        self.context
    }
}

impl Default for TestContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
