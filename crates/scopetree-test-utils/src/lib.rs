#![deny(unsafe_code)]

//! Shared test utilities for the scopetree workspace.
//!
//! Provides reusable fixtures, builders, and tracing helpers so that
//! individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! scopetree-test-utils = { workspace = true }
//! ```
//!
//! Use it from integration tests (`tests/`) only. A crate's own unit tests
//! would see a second copy of its types through this crate.

pub mod config;
pub mod config_file;
pub mod context;
pub mod tracing_setup;

pub use config::TestConfigBuilder;
pub use config_file::TestConfigFile;
pub use context::TestContextBuilder;
