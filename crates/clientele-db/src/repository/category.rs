//! # Category Repository
//!
//! Categories are only ever listed, added and deleted; a category's name
//! never changes once stored.

use clientele_core::Category;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Gets a category by its exact name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name
            FROM categories
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Inserts a new category.
    ///
    /// ## Returns
    /// * `Ok(Category)` - The stored category with its assigned id
    /// * `Err(DbError::DuplicateName)` - A category with this name exists;
    ///   the table is left unchanged
    pub async fn insert(&self, name: &str) -> DbResult<Category> {
        debug!(name = %name, "Inserting category");

        let result = sqlx::query("INSERT INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DbError::from(e).on_unique_violation(|| DbError::DuplicateName {
                    name: name.to_string(),
                })
            })?;

        Ok(Category::new(result.last_insert_rowid(), name))
    }

    /// Deletes a category.
    ///
    /// Customers referencing it are not touched: their `category_id` keeps
    /// pointing at the deleted id and lists with no category name.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No category has this id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Counts categories (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
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
    use crate::{Database, DbConfig};
    use crate::error::DbError;
    use clientele_core::DEFAULT_CATEGORIES;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_seeded_categories_in_name_order() {
        let db = db().await;
        let names: Vec<String> = db
            .categories()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        let mut expected: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let db = db().await;
        let category = db.categories().insert("Wholesale").await.unwrap();

        let stored = db.categories().get_by_name("Wholesale").await.unwrap();
        assert_eq!(stored, Some(category));
    }

    #[tokio::test]
    async fn test_duplicate_name_leaves_table_unchanged() {
        let db = db().await;
        db.categories().insert("VIP").await.unwrap();
        let before = db.categories().list().await.unwrap();

        let err = db.categories().insert("VIP").await.unwrap_err();
        assert!(matches!(err, DbError::DuplicateName { ref name } if name == "VIP"));

        assert_eq!(db.categories().list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = db().await;
        let category = db.categories().insert("Wholesale").await.unwrap();

        db.categories().delete(category.id).await.unwrap();
        assert_eq!(db.categories().get_by_name("Wholesale").await.unwrap(), None);

        let err = db.categories().delete(category.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let db = db().await;
        let first = db.categories().insert("Wholesale").await.unwrap();
        db.categories().delete(first.id).await.unwrap();

        // AUTOINCREMENT keeps orphaned references from resolving to a new category
        let second = db.categories().insert("Retail").await.unwrap();
        assert!(second.id > first.id);
    }
}
