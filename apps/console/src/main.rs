//! # Clientele Console Entry Point
//!
//! ```text
//! $ clientele --db ./shop.db
//! Customers
//! (no customers)
//! clientele> add C1 Alice "VIP Customers" --notes "met at the fair"
//! Customer 'Alice' added
//! ...
//! clientele> quit
//! ```
//!
//! The actual setup is in lib.rs so integration tests can drive it.

use std::process::ExitCode;

use clap::Parser;
use clientele_console_lib::Cli;

fn main() -> ExitCode {
    match clientele_console_lib::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("clientele: {}", err);
            ExitCode::FAILURE
        }
    }
}
