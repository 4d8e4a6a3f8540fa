//! # Clientele Console Library
//!
//! The interactive customer list: launch flags, logging, the store handle
//! and the command loop.
//!
//! ## Module Organization
//! ```text
//! clientele_console_lib/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── repl.rs         ◄─── Line reading, confirmation, dispatch
//! ├── render.rs       ◄─── Table / JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── session.rs  ◄─── Lookup cache, list view, selection, detail view
//! │   └── config.rs   ◄─── Console configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command grammar and dispatch
//! │   ├── category.rs ◄─── Category commands
//! │   ├── customer.rs ◄─── Customer add/save/delete
//! │   └── view.rs     ◄─── Filter, selection, detail view
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod repl;
pub mod state;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clientele_db::{Database, DbConfig};
use error::StartupError;
use repl::Repl;
use state::{ConsoleConfig, DbState, OutputFormat};

/// Launch flags.
#[derive(Debug, Parser)]
#[command(name = "clientele", version, about = "Manage customers and their categories")]
pub struct Cli {
    /// Database file (default: the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print every reply as one line of JSON
    #[arg(long)]
    pub json: bool,

    /// Log store activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies launch flags on top of the environment configuration.
    pub fn apply(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if let Some(path) = &self.db {
            config.database_path = Some(path.clone());
        }
        if self.yes {
            config.confirm_deletes = false;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        config
    }
}

/// Runs the console until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN (`--verbose` for store activity), RUST_LOG wins     │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • CLIENTELE_* environment, then launch flags                        │
/// │                                                                         │
/// │  3. Open the Store ───────────────────────────────────────────────────► │
/// │     • Create tables if missing, seed categories if empty                │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • Show the customer list, then read commands                        │
/// │                                                                         │
/// │  5. Shutdown ─────────────────────────────────────────────────────────► │
/// │     • Close the store handle, also after an I/O failure                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<(), StartupError> {
    init_tracing(cli.verbose);

    let config = cli.apply(ConsoleConfig::from_env());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_console(config))
}

/// Opens the configured store and drives a console session on stdin/stdout.
pub async fn run_console(config: ConsoleConfig) -> Result<(), StartupError> {
    let db_path = config.resolve_database_path()?;
    info!(?db_path, "Database path determined");

    let db = DbState::new(Database::new(DbConfig::new(&db_path)).await?);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut repl =
        Repl::new(db.clone(), config, stdin.lock(), std::io::stdout()).with_prompt(interactive);

    let result = repl.run().await;

    db.close().await;
    info!("Console closed");
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every store call
/// - `RUST_LOG=clientele_db=debug` - Store calls only
/// - Default: WARN, or INFO with debug for clientele crates under `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,clientele=debug,sqlx=warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["clientele", "--db", "/tmp/x.db", "--yes", "--json"]);
        let config = cli.apply(ConsoleConfig::default());

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/x.db")));
        assert!(!config.confirm_deletes);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["clientele"]);
        let env = ConsoleConfig {
            confirm_deletes: false,
            ..Default::default()
        };

        let config = cli.apply(env);
        assert_eq!(config.database_path, None);
        assert!(!config.confirm_deletes);
        assert_eq!(config.output, OutputFormat::Table);
    }
}
