//! # Customer Commands
//!
//! `add`, `save` and `delete`.
//!
//! ## Customer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add C1 Alice VIP ──► validate ──► lookup ──► INSERT ──► list (all)    │
//! │                                                                         │
//! │  select C1 ──► edit ──► save --notes .. ──► UPDATE ──► close view      │
//! │                                                                         │
//! │  select C1 ──► delete ──► y/N ──► DELETE ──► list (current filter)     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clientele_core::validation::{normalize_notes, validate_customer_id, validate_customer_name};
use clientele_core::Customer;
use tracing::info;

use super::{refresh_customers, reset_to_all, Outcome};
use crate::error::ApiError;
use crate::state::{DbState, DetailMode, SessionState};

/// Fields given to `save`; `None` keeps the value shown in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Adds a customer.
///
/// Id, name and category are required; the category must be a known name.
/// The filter is cleared so the new customer is visible.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank field or unknown category
/// - `DUPLICATE_ID` when the id is taken
pub async fn add_customer(
    db: &DbState,
    session: &mut SessionState,
    id: &str,
    name: &str,
    category: &str,
    notes: &str,
) -> Result<Outcome, ApiError> {
    let id = validate_customer_id(id)?;
    let name = validate_customer_name(name)?;
    let category_id = session.lookup.resolve(category)?;
    let notes = normalize_notes(notes)?;

    let customer = Customer::new(id, name, Some(category_id), notes);
    db.inner().customers().insert(&customer).await?;
    info!(id = %customer.id, category_id, "Customer added");

    reset_to_all(db, session).await?;
    Ok(Outcome::Customers {
        message: Some(format!("Customer '{}' added", customer.name)),
    })
}

/// Saves the customer open in the editor.
///
/// The stored id never changes. An orphaned customer whose category is not
/// given keeps its dangling reference.
///
/// ## Errors
/// - `INVALID_STATE` when no editor is open
/// - `VALIDATION_ERROR` for a blank name or unknown category
/// - `NOT_FOUND` when the customer was deleted meanwhile
pub async fn save_customer(
    db: &DbState,
    session: &mut SessionState,
    changes: CustomerChanges,
) -> Result<Outcome, ApiError> {
    let open = match &session.details {
        Some(details) if details.mode == DetailMode::Edit => details.customer.clone(),
        Some(_) => {
            return Err(ApiError::invalid_state(
                "The detail view is read-only, use `edit` to change this customer",
            ))
        }
        None => return Err(ApiError::invalid_state("No customer is open for editing")),
    };

    let name = validate_customer_name(changes.name.as_deref().unwrap_or(&open.name))?;
    let category_id = match changes.category.as_deref() {
        Some(category) => Some(session.lookup.resolve(category)?),
        None => open.category_id,
    };
    let notes = normalize_notes(changes.notes.as_deref().unwrap_or(&open.notes))?;

    let customer = Customer::new(open.id, name, category_id, notes);
    db.inner().customers().update(&customer).await?;
    info!(id = %customer.id, "Customer updated");

    session.details = None;
    refresh_customers(db, session).await?;
    Ok(Outcome::Customers {
        message: Some(format!("Customer '{}' saved", customer.name)),
    })
}

/// Deletes the selected customer.
///
/// ## Errors
/// - `VALIDATION_ERROR` when nothing is selected
/// - `NOT_FOUND` when the row is already gone
pub async fn delete_customer(db: &DbState, session: &mut SessionState) -> Result<Outcome, ApiError> {
    let (id, name) = match session.selected_customer() {
        Some(customer) => (customer.id.clone(), customer.name.clone()),
        None => return Err(ApiError::validation("Select a customer to delete first")),
    };

    db.inner().customers().delete(&id).await?;
    info!(id = %id, "Customer deleted");

    session.close_details_for(&id);
    refresh_customers(db, session).await?;
    Ok(Outcome::Customers {
        message: Some(format!("Customer '{}' deleted", name)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::setup;
    use crate::commands::view;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_add_customer_clears_filter() {
        let (db, mut session) = setup().await;
        view::filter(&db, &mut session, "New Customers").await.unwrap();

        add_customer(&db, &mut session, " C1 ", " Alice ", "VIP Customers", " notes ")
            .await
            .unwrap();

        assert_eq!(session.filter, None);
        assert_eq!(session.customers.len(), 1);
        let row = &session.customers[0];
        assert_eq!(row.id, "C1");
        assert_eq!(row.name, "Alice");
        assert_eq!(row.category_label(), "VIP Customers");
        assert_eq!(row.notes, "notes");
    }

    #[tokio::test]
    async fn test_add_customer_validation() {
        let (db, mut session) = setup().await;
        view::filter(&db, &mut session, "New Customers").await.unwrap();

        for (id, name, category) in [
            ("", "Alice", "VIP Customers"),
            ("C1", "  ", "VIP Customers"),
            ("C1", "Alice", ""),
            ("C1", "Alice", "Gold"),
        ] {
            let err = add_customer(&db, &mut session, id, name, category, "")
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }

        // Nothing written, filter untouched
        assert_eq!(db.inner().customers().count().await.unwrap(), 0);
        assert!(session.filter.is_some());
    }

    #[tokio::test]
    async fn test_add_duplicate_id() {
        let (db, mut session) = setup().await;
        add_customer(&db, &mut session, "C1", "Alice", "VIP Customers", "")
            .await
            .unwrap();

        let err = add_customer(&db, &mut session, "C1", "Bob", "New Customers", "")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateId);

        let row = db.inner().customers().get_by_id("C1").await.unwrap().unwrap();
        assert_eq!(row.name, "Alice");
    }

    #[tokio::test]
    async fn test_save_requires_edit_mode() {
        let (db, mut session) = setup().await;
        add_customer(&db, &mut session, "C1", "Alice", "VIP Customers", "")
            .await
            .unwrap();

        let err = save_customer(&db, &mut session, CustomerChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);

        view::select(&mut session, "C1").unwrap();
        view::open_details(&mut session, DetailMode::View).unwrap();
        let err = save_customer(&db, &mut session, CustomerChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[tokio::test]
    async fn test_save_keeps_unchanged_fields() {
        let (db, mut session) = setup().await;
        add_customer(&db, &mut session, "C1", "Alice", "VIP Customers", "met at fair")
            .await
            .unwrap();
        view::select(&mut session, "C1").unwrap();
        view::open_details(&mut session, DetailMode::Edit).unwrap();

        let changes = CustomerChanges {
            category: Some("Active Customers".into()),
            ..Default::default()
        };
        save_customer(&db, &mut session, changes).await.unwrap();

        assert!(session.details.is_none());
        assert_eq!(session.selected.as_deref(), Some("C1"));
        let row = db.inner().customers().get_by_id("C1").await.unwrap().unwrap();
        assert_eq!(row.name, "Alice");
        assert_eq!(row.category_name.as_deref(), Some("Active Customers"));
        assert_eq!(row.notes, "met at fair");
    }

    #[tokio::test]
    async fn test_save_invalid_keeps_editor_open() {
        let (db, mut session) = setup().await;
        add_customer(&db, &mut session, "C1", "Alice", "VIP Customers", "")
            .await
            .unwrap();
        view::select(&mut session, "C1").unwrap();
        view::open_details(&mut session, DetailMode::Edit).unwrap();

        let changes = CustomerChanges {
            name: Some(" ".into()),
            ..Default::default()
        };
        let err = save_customer(&db, &mut session, changes).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.details.is_some());
    }

    #[tokio::test]
    async fn test_save_customer_deleted_meanwhile() {
        let (db, mut session) = setup().await;
        add_customer(&db, &mut session, "C1", "Alice", "VIP Customers", "")
            .await
            .unwrap();
        view::select(&mut session, "C1").unwrap();
        view::open_details(&mut session, DetailMode::Edit).unwrap();

        db.inner().customers().delete("C1").await.unwrap();

        let err = save_customer(&db, &mut session, CustomerChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_selected_customer() {
        let (db, mut session) = setup().await;
        add_customer(&db, &mut session, "C1", "Alice", "VIP Customers", "")
            .await
            .unwrap();

        let err = delete_customer(&db, &mut session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        view::select(&mut session, "C1").unwrap();
        view::open_details(&mut session, DetailMode::View).unwrap();
        delete_customer(&db, &mut session).await.unwrap();

        assert!(session.customers.is_empty());
        assert_eq!(session.selected, None);
        assert!(session.details.is_none());
    }
}
