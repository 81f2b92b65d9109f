//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values without
//! repeating boilerplate across crate boundaries.

use scopetree_config::AppConfig;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .log_level("debug")
///     .tree_toml("service = \"billing\"\n[db]\nhost = \"localhost\"")
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    /// Replace the `[tree]` table with the given TOML document.
    pub fn tree_toml(mut self, toml_content: &str) -> Self {
        self.config.tree = toml::from_str(toml_content).expect("fixture tree is not valid TOML");
        self
    }

    /// Set a single top-level value in the `[tree]` table.
    pub fn tree_value(mut self, key: &str, value: &str) -> Self {
        self.config
            .tree
            .insert(key.to_string(), toml::Value::String(value.to_string()));
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
