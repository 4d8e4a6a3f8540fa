//! # State Module
//!
//! Application state for the console, split by concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌────────────────────┐  ┌──────────────────┐        │
//! │  │   DbState    │  │   SessionState     │  │  ConsoleConfig   │        │
//! │  │              │  │                    │  │                  │        │
//! │  │  Database    │  │  lookup cache      │  │  database path   │        │
//! │  │  (single     │  │  customer view     │  │  confirm deletes │        │
//! │  │   handle)    │  │  filter/selection  │  │  output format   │        │
//! │  │              │  │  detail view       │  │                  │        │
//! │  └──────────────┘  └────────────────────┘  └──────────────────┘        │
//! │                                                                         │
//! │  Every command receives the state it needs as an argument; nothing     │
//! │  lives in globals.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod session;

pub use config::{ConsoleConfig, OutputFormat};
pub use db::DbState;
pub use session::{ActiveFilter, DetailMode, DetailView, SessionState};
