//! # CLI Error Type
//!
//! Unified error type for the terminal screens.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  stockroom items add --name "" --quantity 3 --price 1.50               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Screen Function                                                 │  │
//! │  │  CliResult<()>                                                   │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError::Required ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Database Error? ─── DbError::UniqueViolation ─── CliError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  main(): log the error, print "Error: <message>" to stderr,            │
//! │          exit with ErrorCode::exit_code()                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected purchase never becomes a `CliError`: the purchase screen
//! prints its warning and exits normally.

use stockroom_core::ValidationError;
use stockroom_db::DbError;

/// Result type for screen functions.
pub type CliResult<T> = Result<T, CliError>;

/// Error returned from a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Write conflicts with existing data (duplicate email, row still referenced)
    Conflict,

    /// Database operation failed
    DatabaseError,

    /// Config file missing or malformed
    ConfigError,

    /// Filesystem error
    IoError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this category.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::ValidationError => 2,
            ErrorCode::NotFound => 3,
            ErrorCode::Conflict => 4,
            ErrorCode::ConfigError => 5,
            ErrorCode::DatabaseError | ErrorCode::IoError | ErrorCode::Internal => 1,
        }
    }
}

impl CliError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Conflict, message)
    }

    /// Creates a config error.
    pub fn config(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ConfigError, message)
    }
}

/// Converts database errors to CLI errors.
impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CliError::not_found(&entity, id),
            DbError::UniqueViolation { field, value } => {
                CliError::conflict(format!("{} '{}' already exists", field, value))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                CliError::conflict("Record is referenced by other records or references a missing one")
            }
            DbError::StockOutOfRange { quantity, .. } => ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: -quantity,
                max: i64::MAX - quantity,
            }
            .into(),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                CliError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                CliError::new(ErrorCode::DatabaseError, "Database schema could not be created")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                CliError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                CliError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                CliError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                CliError::new(ErrorCode::Internal, "Database operation failed")
            }
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::config(format!("Invalid config file: {}", err))
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: CliError = DbError::not_found("Item", 42).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: 42");
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let err: CliError = DbError::UniqueViolation {
            field: "customers.email".into(),
            value: "ada@example.com".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert!(err.message.contains("ada@example.com"));
    }

    #[test]
    fn test_query_failure_hides_details() {
        let err: CliError = DbError::QueryFailed("near \"SELEC\": syntax error".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let source = ValidationError::Required {
            field: "name".into(),
        };
        let expected = source.to_string();

        let err: CliError = source.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, expected);
    }

    #[test]
    fn test_stock_out_of_range_is_validation() {
        let err: CliError = DbError::StockOutOfRange {
            item_id: 1,
            quantity: 10,
            delta: i64::MAX,
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains(&(i64::MAX - 10).to_string()));
    }

    #[test]
    fn test_exit_codes_are_nonzero() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::Conflict,
            ErrorCode::DatabaseError,
            ErrorCode::ConfigError,
            ErrorCode::IoError,
            ErrorCode::Internal,
        ] {
            assert_ne!(code.exit_code(), 0);
        }
    }
}
