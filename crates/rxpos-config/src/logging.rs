//! # Logging Bootstrap
//!
//! Installs the global `tracing` subscriber for a host binary.
//!
//! Default filter is `info,rxpos=debug`; `RUST_LOG` replaces it entirely.

use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ConfigResult};

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "info,rxpos=debug";

/// Builds the env filter without installing anything.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a fmt subscriber. Fails if a global subscriber already exists.
pub fn init_tracing() -> ConfigResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .map_err(|e| ConfigError::LoggingInitFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // Another test may have installed the subscriber first.
        let _ = init_tracing();
        assert!(matches!(init_tracing(), Err(ConfigError::LoggingInitFailed(_))));
    }
}
