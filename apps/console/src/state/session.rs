//! # Session State
//!
//! Everything the list view remembers between commands.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Changes                                │
//! │                                                                         │
//! │  Operator Action          Command               Session Change          │
//! │  ───────────────          ───────               ──────────────          │
//! │                                                                         │
//! │  Pick a row ─────────────► select C1 ──────────► selected = "C1"       │
//! │                                                                         │
//! │  Open the row ───────────► view / edit ────────► details = Some(..)    │
//! │                                                                         │
//! │  Narrow the list ────────► filter VIP ─────────► filter = Some(VIP)    │
//! │                                                                         │
//! │  Category added/deleted ─► (refresh) ──────────► lookup rebuilt        │
//! │                                                                         │
//! │  Any store change ───────► (refresh) ──────────► customers replaced    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands compute everything they need before touching the session, so a
//! failed command leaves it exactly as it was.

use clientele_core::{Category, CategoryLookup, CustomerRow};
use serde::Serialize;

/// The category the list is currently restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub category_id: i64,
    pub category_name: String,
}

/// Whether the open detail view accepts `save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailMode {
    View,
    Edit,
}

/// The single open detail view, with the row as it was when opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub mode: DetailMode,
    pub customer: CustomerRow,
}

/// Console session state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Category name ↔ id cache, rebuilt with every category refresh.
    pub lookup: CategoryLookup,

    /// Categories in name order.
    pub categories: Vec<Category>,

    /// Rows currently shown in the list view.
    pub customers: Vec<CustomerRow>,

    pub filter: Option<ActiveFilter>,

    /// Id of the selected customer; always present in `customers`.
    pub selected: Option<String>,

    pub details: Option<DetailView>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Installs a fresh category listing and rebuilds the lookup cache.
    pub fn apply_categories(&mut self, categories: Vec<Category>) {
        self.lookup.rebuild(&categories);
        self.categories = categories;
    }

    /// Installs a fresh customer listing.
    ///
    /// The selection survives only if its row is still in the list.
    pub fn apply_customers(&mut self, customers: Vec<CustomerRow>) {
        if let Some(selected) = &self.selected {
            if !customers.iter().any(|row| &row.id == selected) {
                self.selected = None;
            }
        }
        self.customers = customers;
    }

    /// Category id the list is filtered by, if any.
    pub fn filter_id(&self) -> Option<i64> {
        self.filter.as_ref().map(|f| f.category_id)
    }

    pub fn customer(&self, id: &str) -> Option<&CustomerRow> {
        self.customers.iter().find(|row| row.id == id)
    }

    pub fn selected_customer(&self) -> Option<&CustomerRow> {
        self.selected.as_deref().and_then(|id| self.customer(id))
    }

    /// Closes the detail view if it shows the given customer.
    pub fn close_details_for(&mut self, customer_id: &str) {
        if self
            .details
            .as_ref()
            .is_some_and(|d| d.customer.id == customer_id)
        {
            self.details = None;
        }
    }
}
