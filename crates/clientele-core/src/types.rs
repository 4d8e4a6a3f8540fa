//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────┐                   │
//! │  │    Category     │        │      Customer        │                   │
//! │  │  ─────────────  │        │  ──────────────────  │                   │
//! │  │  id (auto)      │◄───────│  category_id (opt)   │                   │
//! │  │  name (unique)  │        │  id (operator key)   │                   │
//! │  └─────────────────┘        │  name                │                   │
//! │                             │  notes               │                   │
//! │                             └──────────────────────┘                   │
//! │                                                                         │
//! │  CustomerRow = Customer LEFT JOIN Category (what the list view shows)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Orphaned References
//! Deleting a category leaves `category_id` pointing at a row that no longer
//! exists. The join then yields `category_name = None`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// A named grouping customers can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Auto-assigned primary key.
    pub id: i64,

    /// Unique display name.
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Category {
            id,
            name: name.into(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer record as stored.
///
/// `id` is chosen by the operator and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub category_id: Option<i64>,
    pub notes: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: Option<i64>,
        notes: impl Into<String>,
    ) -> Self {
        Customer {
            id: id.into(),
            name: name.into(),
            category_id,
            notes: notes.into(),
        }
    }
}

// =============================================================================
// Customer Row
// =============================================================================

/// One line of the customer list: a customer joined with its category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerRow {
    pub id: String,
    pub name: String,

    /// Stored reference, possibly dangling.
    pub category_id: Option<i64>,

    /// `None` when the customer has no category or its category was deleted.
    pub category_name: Option<String>,

    pub notes: String,
}

impl CustomerRow {
    /// Returns true when the row references a category that no longer exists.
    pub fn is_orphaned(&self) -> bool {
        self.category_id.is_some() && self.category_name.is_none()
    }

    /// Category label for display, empty when absent.
    pub fn category_label(&self) -> &str {
        self.category_name.as_deref().unwrap_or("")
    }
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            category_id: row.category_id,
            notes: row.notes,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
