//! # clientele-core: Domain Logic for Clientele
//!
//! Types, validation rules and the category lookup cache shared by the
//! store and the console. Nothing in this crate touches a file, a socket or
//! a terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Clientele Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    list view ──► add / edit / filter / delete commands          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ clientele-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────────┐  ┌─────────────┐           │   │
//! │  │   │   types   │  │     lookup     │  │ validation  │           │   │
//! │  │   │ Category  │  │ CategoryLookup │  │  required   │           │   │
//! │  │   │ Customer  │  │  name ↔ id     │  │  fields     │           │   │
//! │  │   └───────────┘  └────────────────┘  └─────────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  clientele-db (Store)                           │   │
//! │  │        schema, seed data, category & customer repositories      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Customer, CustomerRow)
//! - [`error`] - Validation error type
//! - [`validation`] - Required-field and length checks
//! - [`lookup`] - In-memory category name ↔ id cache
//!
//! ## Example Usage
//!
//! ```rust
//! use clientele_core::{Category, CategoryLookup};
//!
//! let categories = vec![
//!     Category::new(2, "Active Customers"),
//!     Category::new(1, "VIP Customers"),
//! ];
//! let lookup = CategoryLookup::from_categories(&categories);
//!
//! assert_eq!(lookup.id_of("VIP Customers"), Some(1));
//! assert!(lookup.resolve("Unknown").is_err());
//! ```

pub mod error;
pub mod lookup;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use lookup::CategoryLookup;
pub use types::*;

/// Categories inserted once when the store is created.
///
/// Listed in insertion order; `list_categories` returns them sorted by name.
pub const DEFAULT_CATEGORIES: [&str; 4] = [
    "VIP Customers",
    "Active Customers",
    "Potential Customers",
    "New Customers",
];

/// Maximum length of a customer id.
pub const MAX_CUSTOMER_ID_LEN: usize = 64;

/// Maximum length of a customer or category name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of the free-text notes field.
pub const MAX_NOTES_LEN: usize = 4000;
