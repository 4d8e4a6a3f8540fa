//! File-backed store tests: schema setup, seeding and persistence across
//! reopening the same database file.

use std::path::PathBuf;

use clientele_core::{Customer, DEFAULT_CATEGORIES};
use clientele_db::{Database, DbConfig, DbError};
use tempfile::TempDir;

struct TestDb {
    _dir: TempDir, // keep alive for the life of the test
    path: PathBuf,
}

fn test_db() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("clientele.db");
    TestDb { _dir: dir, path }
}

async fn open(path: &PathBuf) -> Database {
    Database::new(DbConfig::new(path)).await.expect("open database")
}

fn sorted_seed_names() -> Vec<String> {
    let mut names: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
    names.sort();
    names
}

#[tokio::test]
async fn initialize_seeds_empty_store_once() {
    let test = test_db();
    let db = open(&test.path).await;

    let names: Vec<String> = db
        .categories()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, sorted_seed_names());

    // Running it again is a no-op
    assert_eq!(db.initialize().await.unwrap(), 0);
    assert_eq!(db.categories().count().await.unwrap(), 4);

    db.close().await;
}

#[tokio::test]
async fn reopening_does_not_reseed() {
    let test = test_db();

    let db = open(&test.path).await;
    let vip = db.categories().get_by_name("VIP Customers").await.unwrap().unwrap();
    db.categories().delete(vip.id).await.unwrap();
    db.close().await;

    let db = open(&test.path).await;
    assert_eq!(db.categories().count().await.unwrap(), 3);
    assert_eq!(db.categories().get_by_name("VIP Customers").await.unwrap(), None);
    db.close().await;
}

#[tokio::test]
async fn data_survives_reopen() {
    let test = test_db();

    let db = open(&test.path).await;
    let category = db.categories().insert("Wholesale").await.unwrap();
    db.customers()
        .insert(&Customer::new("C1", "Alice", Some(category.id), "net-30"))
        .await
        .unwrap();
    db.close().await;

    let db = open(&test.path).await;
    let row = db.customers().get_by_id("C1").await.unwrap().unwrap();
    assert_eq!(row.name, "Alice");
    assert_eq!(row.category_name.as_deref(), Some("Wholesale"));
    assert_eq!(row.notes, "net-30");
    db.close().await;
}

#[tokio::test]
async fn uninitialized_handle_has_no_tables() {
    let test = test_db();
    let db = Database::new(DbConfig::new(&test.path).initialize(false))
        .await
        .unwrap();

    let err = db.categories().list().await.unwrap_err();
    assert!(err.is_storage());

    assert_eq!(db.initialize().await.unwrap(), DEFAULT_CATEGORIES.len());
    assert_eq!(db.categories().list().await.unwrap().len(), 4);
    db.close().await;
}

#[tokio::test]
async fn missing_parent_directory_fails_to_connect() {
    let test = test_db();
    let path = test.path.with_file_name("missing").join("clientele.db");

    let err = Database::new(DbConfig::new(path)).await.unwrap_err();
    assert!(matches!(err, DbError::ConnectionFailed(_)));
}

#[tokio::test]
async fn vip_scenario_end_to_end() {
    let test = test_db();
    let db = open(&test.path).await;

    let vip = db.categories().insert("VIP").await.unwrap();
    db.customers()
        .insert(&Customer::new("C1", "Alice", Some(vip.id), ""))
        .await
        .unwrap();

    let rows = db.customers().list(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        (rows[0].id.as_str(), rows[0].name.as_str(), rows[0].category_name.as_deref(), rows[0].notes.as_str()),
        ("C1", "Alice", Some("VIP"), "")
    );

    db.categories().delete(vip.id).await.unwrap();

    let rows = db.customers().list(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        (rows[0].id.as_str(), rows[0].name.as_str(), rows[0].category_name.as_deref(), rows[0].notes.as_str()),
        ("C1", "Alice", None, "")
    );

    db.close().await;
}
