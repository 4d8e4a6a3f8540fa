//! # Console Commands Module
//!
//! Every action the operator can take on the list view.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (grammar, dispatch, refresh)
//! ├── category.rs  ◄─── categories, add-category, delete-category
//! ├── customer.rs  ◄─── add, save, delete
//! └── view.rs      ◄─── list, filter, show-all, select, view, edit, close
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  clientele> add C1 Alice "VIP Customers" --notes "met at fair"         │
//! │         │                                                               │
//! │         │ split_line + clap (multicall)                                 │
//! │         ▼                                                               │
//! │  Command::Add { id, name, category, notes }                            │
//! │         │                                                               │
//! │         │ execute(&DbState, &mut SessionState, command)                 │
//! │         ▼                                                               │
//! │  1. validate required fields        (clientele-core)                   │
//! │  2. category name → id              (session.lookup)                   │
//! │  3. store call                      (clientele-db)                     │
//! │  4. re-query list / categories      (session refresh)                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome::Customers { message } rendered by the REPL                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod category;
pub mod customer;
pub mod view;

use clap::{Parser, Subcommand};

use crate::error::ApiError;
use crate::state::{DbState, DetailMode, SessionState};

/// One line typed at the prompt.
#[derive(Debug, Parser)]
#[command(multicall = true, subcommand_required = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

/// Console command grammar.
///
/// Multi-word category names can be typed without quotes where the
/// category is the last argument (`filter VIP Customers`).
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List categories in name order
    Categories,

    /// Add a category
    AddCategory {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a category; its customers keep a dangling reference
    DeleteCategory {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the customer list
    List,

    /// Show only the customers of one category
    Filter {
        #[arg(required = true, num_args = 1..)]
        category: Vec<String>,
    },

    /// Clear the category filter
    ShowAll,

    /// Add a customer
    Add {
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[arg(allow_hyphen_values = true)]
        name: String,
        category: String,

        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Select a customer in the current list
    Select {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Open the selected customer read-only
    View,

    /// Open the selected customer for editing
    Edit,

    /// Save the customer open for editing; omitted fields keep their value
    Save {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Close the detail view
    Close,

    /// Delete the selected customer
    Delete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Question to ask before running a destructive command, if any.
    pub fn confirmation(&self, session: &SessionState) -> Option<String> {
        match self {
            Command::Delete { yes: false } => session.selected_customer().map(|customer| {
                format!(
                    "Delete customer '{}' (ID: {})? This cannot be undone.",
                    customer.name, customer.id
                )
            }),
            // Unknown names go straight to the handler's validation error
            Command::DeleteCategory { name, yes: false } => {
                let name = name.join(" ");
                session.lookup.resolve(&name).ok()?;
                Some(format!(
                    "Delete category '{}'? Customers in it will lose their category link.",
                    name
                ))
            }
            _ => None,
        }
    }
}

/// What the REPL should show after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The customer list, optionally preceded by a message.
    Customers { message: Option<String> },

    /// The category list, optionally preceded by a message.
    Categories { message: Option<String> },

    /// The open detail view.
    Details,

    Message(String),

    /// Nothing to show.
    Nothing,

    Quit,
}

/// Runs one command against the store and the session.
///
/// On error the session is unchanged and nothing was written.
pub async fn execute(
    db: &DbState,
    session: &mut SessionState,
    command: Command,
) -> Result<Outcome, ApiError> {
    match command {
        Command::Categories => category::list_categories(db, session).await,
        Command::AddCategory { name } => category::add_category(db, session, &name.join(" ")).await,
        Command::DeleteCategory { name, .. } => {
            category::delete_category(db, session, &name.join(" ")).await
        }
        Command::List => view::list(db, session).await,
        Command::Filter { category } => view::filter(db, session, &category.join(" ")).await,
        Command::ShowAll => view::show_all(db, session).await,
        Command::Add {
            id,
            name,
            category,
            notes,
        } => customer::add_customer(db, session, &id, &name, &category, &notes).await,
        Command::Select { id } => view::select(session, &id),
        Command::View => view::open_details(session, DetailMode::View),
        Command::Edit => view::open_details(session, DetailMode::Edit),
        Command::Save {
            name,
            category,
            notes,
        } => {
            let changes = customer::CustomerChanges {
                name,
                category,
                notes,
            };
            customer::save_customer(db, session, changes).await
        }
        Command::Close => view::close_details(session),
        Command::Delete { .. } => customer::delete_customer(db, session).await,
        Command::Quit => Ok(Outcome::Quit),
    }
}

/// Loads categories and the unfiltered customer list at startup.
pub async fn load(db: &DbState, session: &mut SessionState) -> Result<(), ApiError> {
    let categories = db.inner().categories().list().await?;
    let customers = db.inner().customers().list(None).await?;

    session.apply_categories(categories);
    session.filter = None;
    session.apply_customers(customers);
    Ok(())
}

/// Re-reads categories and rebuilds the lookup cache.
pub(crate) async fn refresh_categories(
    db: &DbState,
    session: &mut SessionState,
) -> Result<(), ApiError> {
    let categories = db.inner().categories().list().await?;
    session.apply_categories(categories);
    Ok(())
}

/// Re-reads the customer list with the session's current filter.
pub(crate) async fn refresh_customers(
    db: &DbState,
    session: &mut SessionState,
) -> Result<(), ApiError> {
    let customers = db.inner().customers().list(session.filter_id()).await?;
    session.apply_customers(customers);
    Ok(())
}

/// Drops the filter and shows every customer again.
pub(crate) async fn reset_to_all(db: &DbState, session: &mut SessionState) -> Result<(), ApiError> {
    let customers = db.inner().customers().list(None).await?;
    session.filter = None;
    session.apply_customers(customers);
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
