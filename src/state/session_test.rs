use super::*;
use crate::state::storage::MemoryStorage;

fn admin_user() -> SessionUser {
    SessionUser {
        username: "chirp".to_owned(),
        role: ADMIN_ROLE.to_owned(),
    }
}

fn reader_user() -> SessionUser {
    SessionUser {
        username: "guest".to_owned(),
        role: "ROLE_USER".to_owned(),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn load_from_empty_storage_is_logged_out() {
    let store = SessionStore::load(MemoryStorage::new());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
}

#[test]
fn load_restores_persisted_token_and_user() {
    let storage = MemoryStorage::new();
    storage.set("token", "tok-123");
    storage.set("user", &serde_json::to_string(&admin_user()).unwrap());

    let store = SessionStore::load(storage);
    assert_eq!(store.token(), Some("tok-123"));
    assert!(store.is_authenticated());
    assert!(store.is_admin());
}

#[test]
fn load_treats_undecodable_user_as_absent() {
    let storage = MemoryStorage::new();
    storage.set("user", "not json");

    let store = SessionStore::load(storage);
    assert!(store.user().is_none());
}

// =============================================================
// set_token / set_user mirror into storage
// =============================================================

#[test]
fn set_token_writes_storage_key() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok-1".to_owned()));

    assert!(store.is_authenticated());
    assert_eq!(store.storage().get("token"), Some("tok-1".to_owned()));
}

#[test]
fn set_token_none_deletes_storage_key() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok-1".to_owned()));
    store.set_token(None);

    assert!(!store.is_authenticated());
    assert_eq!(store.storage().get("token"), None);
}

#[test]
fn token_key_mirrors_memory_after_every_call() {
    let mut store = SessionStore::load(MemoryStorage::new());
    for value in [Some("a"), None, Some("b"), Some("c"), None] {
        store.set_token(value.map(str::to_owned));
        assert_eq!(store.storage().get("token").as_deref(), value);
        assert_eq!(store.is_authenticated(), value.is_some());
    }
}

#[test]
fn set_user_serializes_to_storage() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_user(Some(reader_user()));

    let raw = store.storage().get("user").unwrap();
    let decoded: SessionUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, reader_user());
}

#[test]
fn set_user_none_deletes_storage_key() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_user(Some(reader_user()));
    store.set_user(None);
    assert_eq!(store.storage().get("user"), None);
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn is_admin_requires_admin_role() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok".to_owned()));
    store.set_user(Some(reader_user()));
    assert!(!store.is_admin());

    store.set_user(Some(admin_user()));
    assert!(store.is_admin());
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let mut store = SessionStore::load(MemoryStorage::new());
    assert_eq!(store.authorization(), None);

    store.set_token(Some("tok-9".to_owned()));
    assert_eq!(store.authorization().as_deref(), Some("Bearer tok-9"));
}

// Token and user are independently settable: clearing the token leaves a
// stale user profile behind. The loose contract is intentional; `is_admin`
// then reports on data no request can authenticate with.
#[test]
fn cleared_token_can_leave_stale_user() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok".to_owned()));
    store.set_user(Some(admin_user()));

    store.set_token(None);
    assert!(!store.is_authenticated());
    assert!(store.user().is_some());
    assert!(store.is_admin());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok".to_owned()));
    store.set_user(Some(admin_user()));

    store.logout();
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
    assert!(store.storage().is_empty());
}

#[test]
fn logout_twice_matches_logout_once() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok".to_owned()));
    store.set_user(Some(reader_user()));

    store.logout();
    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
    assert!(store.storage().is_empty());
}

#[test]
fn logout_from_clean_state_is_a_no_op() {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.logout();
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
}
