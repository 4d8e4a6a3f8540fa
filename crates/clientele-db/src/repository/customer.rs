//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Listing Query
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    customers LEFT JOIN categories                      │
//! │                                                                         │
//! │  customers                        categories                           │
//! │  ┌──────┬───────┬────────┐        ┌────┬───────┐                       │
//! │  │ C1   │ Alice │ cat 1  │ ─────► │ 1  │ VIP   │  → ("C1","Alice","VIP")│
//! │  │ C2   │ Bob   │ cat 9  │ ─────► │ ✗  │       │  → ("C2","Bob", None)  │
//! │  └──────┴───────┴────────┘        └────┴───────┘                       │
//! │                                                                         │
//! │  ORDER BY customer name. Optional filter: WHERE category_id = ?        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clientele_core::{Customer, CustomerRow};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const SELECT_ROWS: &str = r#"
    SELECT
        c.id,
        c.name,
        c.category_id,
        cat.name AS category_name,
        COALESCE(c.notes, '') AS notes
    FROM customers c
    LEFT JOIN categories cat ON c.category_id = cat.id
"#;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.customers();
///
/// repo.insert(&Customer::new("C1", "Alice", Some(vip_id), "")).await?;
/// let vip_rows = repo.list(Some(vip_id)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists customers joined with their category name, ordered by name.
    ///
    /// ## Arguments
    /// * `category_id` - When set, only customers whose stored
    ///   `category_id` equals it are returned
    pub async fn list(&self, category_id: Option<i64>) -> DbResult<Vec<CustomerRow>> {
        debug!(?category_id, "Listing customers");

        let sql = format!(
            "{SELECT_ROWS} WHERE (?1 IS NULL OR c.category_id = ?1) ORDER BY c.name, c.id"
        );

        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed customers");
        Ok(rows)
    }

    /// Gets one customer row by id.
    ///
    /// ## Returns
    /// * `Ok(Some(CustomerRow))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<CustomerRow>> {
        let sql = format!("{SELECT_ROWS} WHERE c.id = ?1");

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Inserts a new customer.
    ///
    /// ## Returns
    /// * `Ok(())` - Customer stored
    /// * `Err(DbError::DuplicateId)` - The id is taken; the table is left
    ///   unchanged
    pub async fn insert(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, category_id, notes)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(customer.category_id)
        .bind(&customer.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DbError::from(e).on_unique_violation(|| DbError::DuplicateId {
                id: customer.id.clone(),
            })
        })?;

        Ok(())
    }

    /// Replaces name, category and notes of the customer with `customer.id`.
    ///
    /// The id itself is never changed.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No customer has this id
    pub async fn update(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Updating customer");

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                name = ?2,
                category_id = ?3,
                notes = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(customer.category_id)
        .bind(&customer.notes)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", &customer.id));
        }

        Ok(())
    }

    /// Deletes a customer.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No customer has this id
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Counts customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use clientele_core::Customer;

    use crate::error::DbError;
    use crate::{Database, DbConfig};

    async fn db_with_categories() -> (Database, i64, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let vip = db.categories().insert("VIP").await.unwrap().id;
        let retail = db.categories().insert("Retail").await.unwrap().id;
        (db, vip, retail)
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let (db, vip, retail) = db_with_categories().await;
        let repo = db.customers();

        repo.insert(&Customer::new("C3", "Carol", Some(vip), "")).await.unwrap();
        repo.insert(&Customer::new("C1", "Alice", Some(retail), "")).await.unwrap();
        repo.insert(&Customer::new("C2", "Bob", Some(vip), "")).await.unwrap();

        let names: Vec<String> = repo
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[tokio::test]
    async fn test_list_filter_by_category() {
        let (db, vip, retail) = db_with_categories().await;
        let repo = db.customers();

        repo.insert(&Customer::new("C3", "Carol", Some(vip), "")).await.unwrap();
        repo.insert(&Customer::new("C1", "Alice", Some(retail), "")).await.unwrap();
        repo.insert(&Customer::new("C2", "Bob", Some(vip), "")).await.unwrap();
        repo.insert(&Customer::new("C4", "Dan", None, "")).await.unwrap();

        let rows = repo.list(Some(vip)).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["C2", "C3"]);
        assert!(rows.iter().all(|r| r.category_id == Some(vip)));
        assert!(rows.iter().all(|r| r.category_name.as_deref() == Some("VIP")));

        assert_eq!(repo.list(None).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_duplicate_id_leaves_table_unchanged() {
        let (db, vip, retail) = db_with_categories().await;
        let repo = db.customers();

        repo.insert(&Customer::new("C1", "Alice", Some(vip), "first")).await.unwrap();

        let err = repo
            .insert(&Customer::new("C1", "Mallory", Some(retail), "second"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::DuplicateId { ref id } if id == "C1"));

        let rows = repo.list(None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].notes, "first");
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() {
        let (db, vip, retail) = db_with_categories().await;
        let repo = db.customers();

        repo.insert(&Customer::new("C1", "Alice", Some(vip), "")).await.unwrap();
        repo.update(&Customer::new("C1", "Alice Smith", Some(retail), "moved"))
            .await
            .unwrap();

        let row = repo.get_by_id("C1").await.unwrap().unwrap();
        assert_eq!(row.id, "C1");
        assert_eq!(row.name, "Alice Smith");
        assert_eq!(row.category_id, Some(retail));
        assert_eq!(row.category_name.as_deref(), Some("Retail"));
        assert_eq!(row.notes, "moved");
    }

    #[tokio::test]
    async fn test_update_missing_customer() {
        let (db, vip, _) = db_with_categories().await;

        let err = db
            .customers()
            .update(&Customer::new("nobody", "X", Some(vip), ""))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref id, .. } if id == "nobody"));
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let (db, vip, _) = db_with_categories().await;
        let repo = db.customers();

        repo.insert(&Customer::new("C1", "Alice", Some(vip), "")).await.unwrap();
        repo.delete("C1").await.unwrap();
        assert_eq!(repo.get_by_id("C1").await.unwrap(), None);

        assert!(matches!(
            repo.delete("C1").await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_deleting_category_orphans_customers() {
        let (db, vip, _) = db_with_categories().await;
        let repo = db.customers();

        repo.insert(&Customer::new("C1", "Alice", Some(vip), "")).await.unwrap();
        db.categories().delete(vip).await.unwrap();

        let rows = repo.list(None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_id, Some(vip));
        assert_eq!(rows[0].category_name, None);
        assert!(rows[0].is_orphaned());

        // The dangling id still filters
        assert_eq!(repo.list(Some(vip)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_null_notes_read_as_empty() {
        let (db, _, _) = db_with_categories().await;

        sqlx::query("INSERT INTO customers (id, name) VALUES ('C9', 'Legacy')")
            .execute(db.pool())
            .await
            .unwrap();

        let row = db.customers().get_by_id("C9").await.unwrap().unwrap();
        assert_eq!(row.notes, "");
        assert_eq!(row.category_id, None);
        assert!(!row.is_orphaned());
    }
}
