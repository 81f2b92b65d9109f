//! File-backed configuration fixtures.
//!
//! Helpers for exercising [`AppConfig::load`] against real files in a
//! temporary directory.

use std::path::PathBuf;

use scopetree_config::AppConfig;
use tempfile::TempDir;

/// A config file in an owned temp directory.
///
/// The temp directory is deleted automatically when this value is dropped,
/// guaranteeing cleanup even on panic.
pub struct TestConfigFile {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestConfigFile {
    /// Write the given TOML string to a fresh temp file.
    pub async fn with_toml(toml_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("scopetree.toml");
        tokio::fs::write(&path, toml_content)
            .await
            .expect("failed to write test config");

        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Load and validate the file, panicking on failure.
    pub async fn load(&self) -> AppConfig {
        AppConfig::load(&self.path)
            .await
            .expect("failed to parse test config")
    }

    /// Overwrite the file with new content.
    pub async fn write(&self, toml_content: &str) {
        tokio::fs::write(&self.path, toml_content)
            .await
            .expect("failed to write updated config");
    }
}
