//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError::from ← UNIQUE failures become UniqueViolation                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository ← names the violation: DuplicateName / DuplicateId         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (console) ← targeted message vs. generic storage message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A category with this name already exists.
    #[error("category '{name}' already exists")]
    DuplicateName { name: String },

    /// A customer with this id already exists.
    #[error("customer id '{id}' already exists")]
    DuplicateId { id: String },

    /// Update or delete referenced a row that doesn't exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A UNIQUE constraint failed outside the cases the repositories name.
    #[error("unique constraint failed: {constraint}")]
    UniqueViolation { constraint: String },

    /// Database file couldn't be opened.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue
    /// - File is not a SQLite database
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Creating tables or inserting seed categories failed.
    #[error("schema setup failed: {0}")]
    SchemaFailed(String),

    /// Statement execution failed (disk full, I/O error, locked file).
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// The connection was busy for longer than the acquire timeout.
    #[error("database connection unavailable")]
    PoolExhausted,

    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// True for failures of the storage engine itself, as opposed to the
    /// conditions the operator can fix (duplicates, missing rows).
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            DbError::UniqueViolation { .. }
                | DbError::ConnectionFailed(_)
                | DbError::SchemaFailed(_)
                | DbError::QueryFailed(_)
                | DbError::PoolExhausted
                | DbError::Internal(_)
        )
    }

    /// Replaces a generic `UniqueViolation` with the repository's own error.
    pub(crate) fn on_unique_violation(self, named: impl FnOnce() -> DbError) -> DbError {
        match self {
            DbError::UniqueViolation { .. } => named(),
            other => other,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (UNIQUE / PRIMARY KEY) → DbError::UniqueViolation
/// sqlx::Error::Database (other)                → DbError::QueryFailed
/// sqlx::Error::Io                              → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut                    → DbError::PoolExhausted
/// sqlx::Error::PoolClosed                      → DbError::ConnectionFailed
/// Other                                        → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports both UNIQUE and PRIMARY KEY failures as
                // "UNIQUE constraint failed: <table>.<column>"
                if db_err.is_unique_violation() || msg.contains("UNIQUE constraint failed") {
                    let constraint = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { constraint }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::Io(io_err) => DbError::QueryFailed(io_err.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_classification() {
        assert!(!DbError::DuplicateName { name: "VIP".into() }.is_storage());
        assert!(!DbError::DuplicateId { id: "C1".into() }.is_storage());
        assert!(!DbError::not_found("Customer", "C9").is_storage());

        assert!(DbError::QueryFailed("disk I/O error".into()).is_storage());
        assert!(DbError::PoolExhausted.is_storage());
        assert!(DbError::ConnectionFailed("denied".into()).is_storage());
    }

    #[test]
    fn test_on_unique_violation_only_rewrites_unique() {
        let err = DbError::UniqueViolation {
            constraint: "categories.name".into(),
        }
        .on_unique_violation(|| DbError::DuplicateName { name: "VIP".into() });
        assert!(matches!(err, DbError::DuplicateName { ref name } if name == "VIP"));

        let err = DbError::PoolExhausted
            .on_unique_violation(|| DbError::DuplicateName { name: "VIP".into() });
        assert!(matches!(err, DbError::PoolExhausted));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DbError::not_found("Category", 42).to_string(),
            "Category not found: 42"
        );
        assert_eq!(
            DbError::DuplicateId { id: "C1".into() }.to_string(),
            "customer id 'C1' already exists"
        );
    }

    #[test]
    fn test_pool_errors_convert() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }
}
