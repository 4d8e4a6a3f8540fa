//! # Category Commands
//!
//! `categories`, `add-category` and `delete-category`.
//!
//! Every change re-reads the category table and rebuilds the lookup cache
//! wholesale, so the cache can never hold a deleted category.

use clientele_core::validation::validate_category_name;
use tracing::info;

use super::{refresh_categories, reset_to_all, Outcome};
use crate::error::ApiError;
use crate::state::{DbState, SessionState};

/// Re-reads and shows the category list.
pub async fn list_categories(db: &DbState, session: &mut SessionState) -> Result<Outcome, ApiError> {
    refresh_categories(db, session).await?;
    Ok(Outcome::Categories { message: None })
}

/// Adds a category.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank name
/// - `DUPLICATE_NAME` when the name is taken
pub async fn add_category(
    db: &DbState,
    session: &mut SessionState,
    name: &str,
) -> Result<Outcome, ApiError> {
    let name = validate_category_name(name)?;

    let category = db.inner().categories().insert(&name).await?;
    info!(id = category.id, name = %category.name, "Category added");

    refresh_categories(db, session).await?;
    Ok(Outcome::Categories {
        message: Some(format!("Category '{}' added", category.name)),
    })
}

/// Deletes a category by name.
///
/// Customers in the category stay in the store with a dangling reference.
/// The filter is cleared afterwards since it may have pointed at the
/// deleted category.
pub async fn delete_category(
    db: &DbState,
    session: &mut SessionState,
    name: &str,
) -> Result<Outcome, ApiError> {
    let id = session.lookup.resolve(name)?;
    let name = name.trim();

    db.inner().categories().delete(id).await?;
    info!(id, name = %name, "Category deleted");

    refresh_categories(db, session).await?;
    reset_to_all(db, session).await?;
    Ok(Outcome::Customers {
        message: Some(format!("Category '{}' deleted", name)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::setup;
    use crate::commands::{customer, view};
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_add_category_rebuilds_lookup() {
        let (db, mut session) = setup().await;

        let outcome = add_category(&db, &mut session, "  Wholesale ").await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Categories {
                message: Some("Category 'Wholesale' added".into())
            }
        );
        assert!(session.lookup.contains("Wholesale"));
        assert_eq!(session.categories.len(), 5);
    }

    #[tokio::test]
    async fn test_add_category_errors_leave_state() {
        let (db, mut session) = setup().await;

        let err = add_category(&db, &mut session, "   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_category(&db, &mut session, "VIP Customers").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateName);
        assert_eq!(session.lookup.len(), 4);
        assert_eq!(db.inner().categories().count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_delete_category_orphans_and_clears_filter() {
        let (db, mut session) = setup().await;
        add_category(&db, &mut session, "VIP").await.unwrap();
        customer::add_customer(&db, &mut session, "C1", "Alice", "VIP", "")
            .await
            .unwrap();
        view::filter(&db, &mut session, "VIP").await.unwrap();

        delete_category(&db, &mut session, "VIP").await.unwrap();

        assert!(!session.lookup.contains("VIP"));
        assert_eq!(session.filter, None);
        assert_eq!(session.customers.len(), 1);
        assert_eq!(session.customers[0].category_name, None);
        assert!(session.customers[0].is_orphaned());
    }

    #[tokio::test]
    async fn test_delete_unknown_category() {
        let (db, mut session) = setup().await;
        let err = delete_category(&db, &mut session, "Gold").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "category 'Gold' does not exist");
    }
}
