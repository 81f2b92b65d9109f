//! Process-wide tracing setup.

use tracing_subscriber::EnvFilter;

use crate::{ConfigError, LoggingConfig};

/// Build the filter for the given config. `RUST_LOG` overrides the
/// configured level when set.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install a global fmt subscriber filtered by [`env_filter`].
///
/// Only one global subscriber can exist per process; later calls return
/// [`ConfigError::Logging`].
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
