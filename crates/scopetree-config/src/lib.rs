#![deny(unsafe_code)]

//! Configuration loading and validation for scopetree.
//!
//! Loads TOML configuration files into [`AppConfig`]. Besides logging
//! settings, a configuration may carry a `[tree]` table that seeds a root
//! [`Context`]: sub-tables become children and scalars become values.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [tree]
//! service = "billing"
//!
//! [tree.db]
//! host = "localhost"
//! port = 5432
//! ```

/// Tracing subscriber setup driven by [`LoggingConfig`].
pub mod logging;
/// Conversion of the `[tree]` table into a context tree.
pub mod seed;

use std::path::Path;

use scopetree_core::{Context, ContextError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("context rejected seed data: {0}")]
    Context(#[from] ContextError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed data for the root context.
    #[serde(default)]
    pub tree: toml::Table,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                valid_levels, self.logging.level
            )));
        }

        seed::validate_table(&self.tree, "tree").map_err(ConfigError::Validation)
    }

    /// Build a fresh root [`Context`] from the `[tree]` table.
    pub fn build_context(&self) -> Result<Context, ConfigError> {
        let mut root = Context::new();
        seed::populate(&mut root, &self.tree, "tree")?;
        debug!(names = root.len(), "seeded root context");
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(config.tree.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.build_context().unwrap().is_empty());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [logging]
            level = "debug"

            [tree]
            service = "billing"

            [tree.db]
            host = "localhost"
            port = 5432
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.logging.level, "debug");

        let root = config.build_context().unwrap();
        assert_eq!(root.get("service"), Some("billing"));
        let db = root.child("db").unwrap();
        assert_eq!(db.get("host"), Some("localhost"));
        assert_eq!(db.get("port"), Some("5432"));
    }

    #[test]
    fn test_validation_rejects_bad_level() {
        let toml = r#"
            [logging]
            level = "verbose"
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validation_rejects_delimiter_in_tree_key() {
        let toml = r#"
            [tree.db]
            "host/name" = "localhost"
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: tree.db.host/name: names must not contain '/'"
        );
    }

    #[test]
    fn test_validation_rejects_arrays() {
        let toml = r#"
            [tree]
            hosts = ["a", "b"]
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("tree.hosts"));
    }

    #[test]
    fn test_build_context_reports_context_errors() {
        // Bypass validation by constructing the table directly.
        let mut config = AppConfig::default();
        config
            .tree
            .insert("a/b".to_string(), toml::Value::String("x".to_string()));
        let err = config.build_context().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Context(ContextError::ReservedDelimiter { .. })
        ));
    }

    #[test]
    fn test_build_context_without_validate_names_array_path() {
        let mut config = AppConfig::default();
        config.tree = toml::from_str("[db]\nhosts = [\"a\", \"b\"]").unwrap();
        let err = config.build_context().unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: tree.db.hosts: arrays are not supported"
        );
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = AppConfig::parse("not valid toml [[[").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_roundtrip_through_toml_string() {
        let toml = r#"
            [tree]
            name = "root"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        let rendered = toml::to_string(&config).unwrap();
        let reparsed = AppConfig::parse(&rendered).unwrap();
        assert_eq!(reparsed.tree, config.tree);
    }

    // ── Async file-based loading ──────────────────────────────────────

    #[tokio::test]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scopetree.toml");
        tokio::fs::write(&path, b"[logging]\nlevel = \"warn\"\n[tree]\nregion = \"eu\"\n")
            .await
            .unwrap();

        let config = AppConfig::load(&path).await.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.build_context().unwrap().get("region"), Some("eu"));
    }

    #[tokio::test]
    async fn test_load_nonexistent_file() {
        let err = AppConfig::load(Path::new("/nonexistent/file.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_invalid_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        tokio::fs::write(&path, b"not valid toml [[[").await.unwrap();

        let result = AppConfig::load(&path).await;
        assert!(result.is_err());
    }

    // ── Error display ─────────────────────────────────────────────────

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bad value".to_string());
        assert_eq!(err.to_string(), "validation error: bad value");

        let err = ConfigError::from(ContextError::KeyExists {
            name: "a".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "context rejected seed data: \"a\" already names a value"
        );
    }
}
