//! # Error Types
//!
//! Domain-specific error types for clientele-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  clientele-core errors (this file)                                     │
//! │  └── ValidationError  - Input rejected before reaching the store       │
//! │                                                                         │
//! │  clientele-db errors (separate crate)                                  │
//! │  └── DbError          - DuplicateName, DuplicateId, NotFound, storage  │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ApiError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        DbError ─────────┴──► ApiError ──► message in the list view     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These occur when operator input doesn't meet requirements and are
/// raised before any store operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// The chosen category name is not in the lookup cache.
    #[error("category '{name}' does not exist")]
    UnknownCategory { name: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        ValidationError::UnknownCategory { name: name.into() }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
