//! # Validation Module
//!
//! Required-field checks run by the console before any store call.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console command (THIS MODULE)                                │
//! │  ├── Trim input                                                        │
//! │  ├── Reject blank required fields                                      │
//! │  └── Reject oversized values                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Category lookup                                              │
//! │  └── Category name must resolve to an id                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE / PRIMARY KEY constraints                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator returns the trimmed value so callers store exactly what
//! was checked.

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_CUSTOMER_ID_LEN, MAX_NAME_LEN, MAX_NOTES_LEN};

/// Trims `value` and rejects it if blank.
pub fn require(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value.to_string())
}

fn check_len(field: &str, value: String, max: usize) -> ValidationResult<String> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value)
}

/// Validates an operator-chosen customer id.
///
/// ## Example
/// ```rust
/// use clientele_core::validation::validate_customer_id;
///
/// assert_eq!(validate_customer_id("  C1 ").unwrap(), "C1");
/// assert!(validate_customer_id("").is_err());
/// ```
pub fn validate_customer_id(id: &str) -> ValidationResult<String> {
    let id = require("customer id", id)?;
    check_len("customer id", id, MAX_CUSTOMER_ID_LEN)
}

/// Validates a customer name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = require("customer name", name)?;
    check_len("customer name", name, MAX_NAME_LEN)
}

/// Validates a category name (new category or a selection).
pub fn validate_category_name(name: &str) -> ValidationResult<String> {
    let name = require("category", name)?;
    check_len("category", name, MAX_NAME_LEN)
}

/// Normalizes free-text notes. Blank notes are allowed.
pub fn normalize_notes(notes: &str) -> ValidationResult<String> {
    check_len("notes", notes.trim().to_string(), MAX_NOTES_LEN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_id() {
        assert_eq!(validate_customer_id("C1").unwrap(), "C1");
        assert_eq!(validate_customer_id("  C-001\t").unwrap(), "C-001");

        assert_eq!(
            validate_customer_id("   ").unwrap_err(),
            ValidationError::required("customer id")
        );
        assert!(matches!(
            validate_customer_id(&"X".repeat(65)),
            Err(ValidationError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name(" Alice ").unwrap(), "Alice");
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_category_name() {
        assert_eq!(validate_category_name("VIP").unwrap(), "VIP");
        assert_eq!(
            validate_category_name("\n").unwrap_err(),
            ValidationError::required("category")
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 200 three-byte characters is still within the limit
        assert!(validate_customer_name(&"客".repeat(200)).is_ok());
    }

    #[test]
    fn test_normalize_notes() {
        assert_eq!(normalize_notes("").unwrap(), "");
        assert_eq!(normalize_notes("  pays late \n").unwrap(), "pays late");
        assert!(normalize_notes(&"n".repeat(4001)).is_err());
    }
}
