//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Amounts that do not parse                      │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal shows                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Purchase rejections are not errors: see [`crate::purchase::PurchaseRejection`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A money amount could not be parsed.
    ///
    /// clap reports this message when `--price` is malformed.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by the form validators.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_message() {
        let err = CoreError::InvalidAmount {
            input: "1.234".to_string(),
            reason: "at most 2 decimal places".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount '1.234': at most 2 decimal places"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooLong {
            field: "phone".to_string(),
            max: 20,
        };
        assert_eq!(err.to_string(), "phone must be at most 20 characters");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 90,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 90");
    }
}
