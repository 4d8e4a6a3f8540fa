//! # Category Lookup Cache
//!
//! Maps category names to ids so a name typed by the operator can be turned
//! into the foreign key stored on a customer.
//!
//! ## Refresh Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add-category / delete-category                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.list_categories()  ──►  CategoryLookup::rebuild(&categories)    │
//! │                                                                         │
//! │  The cache is replaced wholesale, never patched, so a deleted          │
//! │  category can't linger and a new one can't be missed.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache relies on category names being unique, which the schema
//! enforces with a UNIQUE constraint.

use std::collections::HashMap;

use crate::error::{ValidationError, ValidationResult};
use crate::types::Category;
use crate::validation::validate_category_name;

/// In-memory category name → id mapping for one console session.
#[derive(Debug, Clone, Default)]
pub struct CategoryLookup {
    by_name: HashMap<String, i64>,
}

impl CategoryLookup {
    /// Builds a cache from a category listing.
    pub fn from_categories(categories: &[Category]) -> Self {
        let by_name = categories
            .iter()
            .map(|category| (category.name.clone(), category.id))
            .collect();
        CategoryLookup { by_name }
    }

    /// Replaces the whole cache with a fresh listing.
    pub fn rebuild(&mut self, categories: &[Category]) {
        *self = CategoryLookup::from_categories(categories);
    }

    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Validates a selected category name and resolves it to an id.
    ///
    /// ## Errors
    /// * `Required` - name is blank
    /// * `UnknownCategory` - name is not in the cache
    pub fn resolve(&self, name: &str) -> ValidationResult<i64> {
        let name = validate_category_name(name)?;
        self.id_of(&name)
            .ok_or_else(|| ValidationError::unknown_category(name))
    }
}
