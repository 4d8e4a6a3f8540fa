//! # List View Commands
//!
//! Filtering, selection and the detail view. Only `list`, `filter` and
//! `show-all` talk to the store; the rest work on the session alone.

use tracing::debug;

use super::{refresh_customers, reset_to_all, Outcome};
use crate::error::{ApiError, ErrorCode};
use crate::state::{ActiveFilter, DbState, DetailMode, DetailView, SessionState};

/// Re-reads the customer list with the current filter.
pub async fn list(db: &DbState, session: &mut SessionState) -> Result<Outcome, ApiError> {
    refresh_customers(db, session).await?;
    Ok(Outcome::Customers { message: None })
}

/// Restricts the list to one category.
///
/// An unknown category leaves the current list and filter untouched.
pub async fn filter(
    db: &DbState,
    session: &mut SessionState,
    category: &str,
) -> Result<Outcome, ApiError> {
    let category_id = session.lookup.resolve(category)?;
    let customers = db.inner().customers().list(Some(category_id)).await?;
    debug!(category_id, rows = customers.len(), "Filter applied");

    session.filter = Some(ActiveFilter {
        category_id,
        category_name: category.trim().to_string(),
    });
    session.apply_customers(customers);
    Ok(Outcome::Customers { message: None })
}

/// Clears the filter.
pub async fn show_all(db: &DbState, session: &mut SessionState) -> Result<Outcome, ApiError> {
    reset_to_all(db, session).await?;
    Ok(Outcome::Customers { message: None })
}

/// Selects a customer shown in the current list.
pub fn select(session: &mut SessionState, id: &str) -> Result<Outcome, ApiError> {
    let id = id.trim();
    let name = match session.customer(id) {
        Some(customer) => customer.name.clone(),
        None => {
            return Err(ApiError::new(
                ErrorCode::NotFound,
                format!("Customer '{}' is not in the current list", id),
            ))
        }
    };

    session.selected = Some(id.to_string());
    Ok(Outcome::Message(format!("Selected {} ({})", id, name)))
}

/// Opens the selected customer in the detail view.
///
/// Only one detail view exists at a time: with one already open this just
/// shows it again. With nothing selected, `view` does nothing and `edit`
/// asks for a selection.
pub fn open_details(session: &mut SessionState, mode: DetailMode) -> Result<Outcome, ApiError> {
    if session.details.is_some() {
        return Ok(Outcome::Details);
    }

    let customer = match session.selected_customer() {
        Some(customer) => customer.clone(),
        None if mode == DetailMode::View => return Ok(Outcome::Nothing),
        None => return Err(ApiError::validation("Select a customer to edit first")),
    };

    session.details = Some(DetailView { mode, customer });
    Ok(Outcome::Details)
}

pub fn close_details(session: &mut SessionState) -> Result<Outcome, ApiError> {
    match session.details.take() {
        Some(_) => Ok(Outcome::Nothing),
        None => Err(ApiError::invalid_state("No detail view is open")),
    }
}
