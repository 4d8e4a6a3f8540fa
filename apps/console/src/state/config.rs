//! # Configuration State
//!
//! Console settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Launch flags (`--db`, `--yes`, `--json`)
//! 2. Environment variables (`CLIENTELE_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// File name used inside the platform data directory.
pub const DATABASE_FILE_NAME: &str = "clientele.db";

/// How the list view and messages are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,

    /// One JSON document per reply
    Json,
}

/// Console configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Explicit database file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Ask `y/N` before deleting a customer or a category.
    pub confirm_deletes: bool,

    pub output: OutputFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            database_path: None,
            confirm_deletes: true,
            output: OutputFormat::Table,
        }
    }
}

impl ConsoleConfig {
    /// Creates a ConsoleConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CLIENTELE_DB_PATH`: database file
    /// - `CLIENTELE_CONFIRM_DELETES`: `0`, `false` or `no` disables prompts
    /// - `CLIENTELE_OUTPUT`: `json` or `table`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConsoleConfig::default();

        if let Some(path) = lookup("CLIENTELE_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(confirm) = lookup("CLIENTELE_CONFIRM_DELETES") {
            config.confirm_deletes = !matches!(
                confirm.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        if let Some(output) = lookup("CLIENTELE_OUTPUT") {
            if output.trim().eq_ignore_ascii_case("json") {
                config.output = OutputFormat::Json;
            }
        }

        config
    }

    /// Resolves the database file, creating the data directory if needed.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.clientele.clientele/clientele.db`
    /// - **Windows**: `%APPDATA%\clientele\clientele\data\clientele.db`
    /// - **Linux**: `~/.local/share/clientele/clientele.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, StartupError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs =
            ProjectDirs::from("com", "clientele", "clientele").ok_or(StartupError::NoDataDir)?;
        let data_dir = dirs.data_dir();

        std::fs::create_dir_all(data_dir).map_err(|source| StartupError::DataDir {
            path: data_dir.display().to_string(),
            source,
        })?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }
}
