//! # Schema Setup
//!
//! Creates the two tables on first use and seeds the starter categories.
//!
//! ## Startup Process
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      initialize()                                       │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    CREATE TABLE IF NOT EXISTS categories                               │
//! │    CREATE TABLE IF NOT EXISTS customers                                │
//! │    SELECT COUNT(*) FROM categories                                     │
//! │       │                                                                 │
//! │       ├── 0 rows?  INSERT the DEFAULT_CATEGORIES                       │
//! │       └── else     leave the table alone                               │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Safe to run on every startup.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no schema versioning. The `FOREIGN KEY` clause on customers is
//! declared but not enforced (see [`crate::pool`]), so deleting a category
//! leaves its customers pointing at a missing id.

use clientele_core::DEFAULT_CATEGORIES;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

const CREATE_CATEGORIES: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
"#;

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        category_id INTEGER,
        notes       TEXT,
        FOREIGN KEY (category_id) REFERENCES categories (id)
    )
"#;

/// Creates missing tables and seeds categories into an empty store.
///
/// ## Returns
/// Number of seed categories inserted (0 when the store was already seeded).
pub async fn initialize(pool: &SqlitePool) -> DbResult<usize> {
    info!("Initializing schema");

    let mut tx = pool.begin().await?;

    for statement in [CREATE_CATEGORIES, CREATE_CUSTOMERS] {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;

    let mut seeded = 0;
    if existing == 0 {
        for name in DEFAULT_CATEGORIES {
            debug!(name, "Seeding category");
            sqlx::query("INSERT INTO categories (name) VALUES (?1)")
                .bind(name)
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
            seeded += 1;
        }
    }

    tx.commit().await?;

    info!(seeded, "Schema ready");
    Ok(seeded)
}
