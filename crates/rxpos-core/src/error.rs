//! # Error Types
//!
//! Domain-specific error types for rxpos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rxpos-core errors (this file)                                         │
//! │  ├── CoreError        - Payload decoding, wraps validation             │
//! │  └── ValidationError  - Rejected configuration values                  │
//! │                                                                         │
//! │  rxpos-config errors (separate crate)                                  │
//! │  └── ConfigError      - listing.toml load/save/validate failures       │
//! │                                                                         │
//! │  NOT errors: out-of-range pages, bad "go to page" text, malformed      │
//! │  date criteria, empty result sets. Those are normalised in place.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the list core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The API response body could not be decoded into records.
    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejected configuration values.
///
/// Produced while building page sizes and list options, or parsing a view,
/// report type or scope name. Runtime navigation never goes through this
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric page size).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "page_size".to_string(),
        };
        assert_eq!(err.to_string(), "page_size must be positive");

        let err = ValidationError::NotAllowed {
            field: "page_size".to_string(),
            allowed: vec!["5".to_string(), "10".to_string()],
        };
        assert_eq!(err.to_string(), r#"page_size must be one of: ["5", "10"]"#);

        let err = ValidationError::InvalidFormat {
            field: "page_size".to_string(),
            reason: "'ten' is not a whole number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "page_size has invalid format: 'ten' is not a whole number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "page_size".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_payload_error_conversion() {
        let json_err = serde_json::from_str::<Vec<i64>>("{not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(core_err.to_string().starts_with("Invalid record payload"));
    }
}
