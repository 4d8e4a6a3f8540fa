//! # Repository Module
//!
//! Database repository implementations for Clientele.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Console command                                                       │
//! │       │                                                                 │
//! │       │  db.customers().list(Some(category_id))                        │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── list(&self, filter)                                               │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, customer)                                           │
//! │  ├── update(&self, customer)                                           │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  One parameterized statement per call                          │
//! │       ▼                                                                 │
//! │  SQLite                                                                │
//! │                                                                         │
//! │  The console never writes SQL; everything goes through here.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`category::CategoryRepository`] - Category listing, add, delete
//! - [`customer::CustomerRepository`] - Joined listing and customer CRUD
//!
//! ## Missing Rows
//! `update` and `delete` report `DbError::NotFound` when no row matched,
//! for both categories and customers.

pub mod category;
pub mod customer;
