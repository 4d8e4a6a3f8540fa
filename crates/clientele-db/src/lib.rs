//! # clientele-db: Store for Clientele
//!
//! Durable persistence of categories and customers in a local SQLite file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Clientele Data Flow                              │
//! │                                                                         │
//! │  Console command (add, filter, delete-category, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   clientele-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repositories    │  │   Schema   │  │   │
//! │  │   │   (pool.rs)   │    │                    │  │            │  │   │
//! │  │   │               │    │ CategoryRepository │  │ CREATE IF  │  │   │
//! │  │   │ one SQLite    │◄───│ CustomerRepository │  │ NOT EXISTS │  │   │
//! │  │   │ connection    │    │                    │  │ + seed     │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clientele.db (categories, customers)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection handle and configuration
//! - [`schema`] - Table creation and seed categories
//! - [`error`] - Database error types
//! - [`repository`] - Category and customer repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clientele_db::{Database, DbConfig};
//!
//! // Opens the file and creates + seeds the schema on first use
//! let db = Database::new(DbConfig::new("clientele.db")).await?;
//!
//! let categories = db.categories().list().await?;
//! let rows = db.customers().list(None).await?;
//!
//! db.close().await;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::category::CategoryRepository;
pub use repository::customer::CustomerRepository;
