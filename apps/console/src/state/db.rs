//! # Database State
//!
//! Wraps the `Database` handle for use in console commands.

use clientele_db::Database;

/// Wrapper around `Database` handed to every command.
///
/// Commands only see the repositories, never the pool.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Releases the storage handle.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
