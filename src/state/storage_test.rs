use super::*;

// =============================================================
// MemoryStorage basics
// =============================================================

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    store.set("token", "abc");
    assert_eq!(store.get("token"), Some("abc".to_owned()));
}

#[test]
fn memory_storage_remove_deletes_key() {
    let store = MemoryStorage::new();
    store.set("token", "abc");
    store.remove("token");
    assert_eq!(store.get("token"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let store = MemoryStorage::new();
    store.set("user", "first");
    store.set("user", "second");
    assert_eq!(store.get("user"), Some("second".to_owned()));
    assert_eq!(store.len(), 1);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[test]
fn browser_storage_is_inert_natively() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
