//! Unit tests for the key-value LocalStore backed by SQLite.

use std::sync::Arc;

use travily::database::{Database, LocalStore, LocalStoreTrait};

/// Helper: create a LocalStore over a fresh in-memory database.
fn setup() -> LocalStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    LocalStore::new(Arc::new(db))
}

#[test]
fn test_get_missing_key_returns_none() {
    let store = setup();
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn test_set_then_get_roundtrip() {
    let store = setup();
    store.set("search_history", r#"["Paris, France"]"#).unwrap();
    assert_eq!(
        store.get("search_history").unwrap(),
        Some(r#"["Paris, France"]"#.to_string())
    );
}

#[test]
fn test_set_overwrites_existing_value() {
    let store = setup();
    store.set("travily_token", "old-token").unwrap();
    store.set("travily_token", "new-token").unwrap();
    assert_eq!(
        store.get("travily_token").unwrap(),
        Some("new-token".to_string())
    );
}

#[test]
fn test_remove_deletes_value() {
    let store = setup();
    store.set("travily_user", "{}").unwrap();
    store.remove("travily_user").unwrap();
    assert_eq!(store.get("travily_user").unwrap(), None);
}

#[test]
fn test_remove_missing_key_is_not_an_error() {
    let store = setup();
    assert!(store.remove("never_set").is_ok());
}

#[test]
fn test_values_shared_across_store_clones() {
    let db = Arc::new(Database::open_in_memory().expect("open failed"));
    let store_a = LocalStore::new(db.clone());
    let store_b = LocalStore::new(db);

    store_a.set("key", "value").unwrap();
    assert_eq!(store_b.get("key").unwrap(), Some("value".to_string()));
}
