//! # Config Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Config Error Categories                             │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   File I/O       │  │   Content        │  │   Bootstrap          │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  ConfigLoadFailed│  │  InvalidConfig   │  │  LoggingInitFailed   │  │
//! │  │  ConfigSaveFailed│  │  UnknownView     │  │                      │  │
//! │  │                  │  │  Validation      │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rxpos_core::ValidationError;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // =========================================================================
    // Content Errors
    // =========================================================================
    #[error("Invalid listing configuration: {0}")]
    InvalidConfig(String),

    /// A `[views.<name>]` table names a view that does not exist.
    #[error("Unknown view in listing configuration: '{0}'")]
    UnknownView(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // =========================================================================
    // File Errors
    // =========================================================================
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Bootstrap Errors
    // =========================================================================
    #[error("Failed to initialise logging: {0}")]
    LoggingInitFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::ConfigSaveFailed(err.to_string())
    }
}

impl ConfigError {
    /// True when the file was readable but its content was rejected.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidConfig(_) | ConfigError::UnknownView(_) | ConfigError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnknownView("dashboard".into());
        assert!(err.to_string().contains("dashboard"));

        let err: ConfigError = ValidationError::MustBePositive {
            field: "page_size".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Validation error: page_size must be positive");
        assert!(err.is_content_error());
    }

    #[test]
    fn test_io_errors_are_load_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::from(io);
        assert!(matches!(err, ConfigError::ConfigLoadFailed(_)));
        assert!(!err.is_content_error());
    }
}
