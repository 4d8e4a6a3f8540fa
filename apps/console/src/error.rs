//! # Console Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Clientele                              │
//! │                                                                         │
//! │  Operator types: add C1 Alice VIP                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler → Result<Outcome, ApiError>                     │  │
//! │  │         │                                                        │  │
//! │  │         ├── ValidationError (blank id, unknown category)  ──┐    │  │
//! │  │         │                                                   │    │  │
//! │  │         ├── DbError::DuplicateId / DuplicateName / NotFound ┼──► │  │
//! │  │         │                                                   │    │  │
//! │  │         └── DbError (storage) ── logged, generic message ───┘    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rendered as "[DUPLICATE_ID] Customer ID 'C1' already exists ..."      │
//! │  Session state is left exactly as it was. No retry.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clientele_core::ValidationError;
use clientele_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from console commands.
///
/// ## Serialization
/// With `--json` the operator sees:
/// ```json
/// {
///   "code": "DUPLICATE_ID",
///   "message": "Customer ID 'C1' already exists, please use a different ID"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code}] {message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Category name already taken
    DuplicateName,

    /// Customer id already taken
    DuplicateId,

    /// Row or list entry doesn't exist
    NotFound,

    /// Required input missing or invalid
    ValidationError,

    /// Command doesn't apply right now (nothing selected, no open editor)
    InvalidState,

    /// Underlying storage failure
    StorageError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
            ErrorCode::DuplicateId => "DUPLICATE_ID",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        f.write_str(code)
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidState, message)
    }
}

/// Converts store errors to console errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateName { name } => ApiError::new(
                ErrorCode::DuplicateName,
                format!("Category '{}' already exists", name),
            ),
            DbError::DuplicateId { id } => ApiError::new(
                ErrorCode::DuplicateId,
                format!("Customer ID '{}' already exists, please use a different ID", id),
            ),
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            other => {
                // Log the actual error but show a generic message
                tracing::error!(error = %other, "Database operation failed");
                ApiError::new(
                    ErrorCode::StorageError,
                    "Database operation failed, see the log for details",
                )
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Errors that stop the console before or outside the command loop.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("could not determine the app data directory")]
    NoDataDir,

    #[error("could not prepare {path}: {source}")]
    DataDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open the database: {0}")]
    Database(#[from] DbError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
