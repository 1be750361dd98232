use super::*;
use crate::state::session::{ADMIN_ROLE, SessionUser};
use crate::state::storage::MemoryStorage;

fn logged_in_store() -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_token(Some("tok-abc".to_owned()));
    store.set_user(Some(SessionUser {
        username: "chirp".to_owned(),
        role: ADMIN_ROLE.to_owned(),
    }));
    store
}

// =============================================================
// 401/403 recovery
// =============================================================

// Ordering invariant: the session is fully cleared before the redirect
// target is produced, so nothing can issue the redirect first.
#[test]
fn recovery_clears_session_before_yielding_redirect() {
    let mut store = logged_in_store();
    let target = recover_unauthorized(&mut store, "/admin/posts");

    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
    assert!(store.storage().is_empty());
    assert_eq!(target, "/admin/login?redirect=/admin/posts");
}

#[test]
fn recovery_preserves_intended_path_with_query() {
    let mut store = logged_in_store();
    let target = recover_unauthorized(&mut store, "/admin/posts/edit/3?draft=1");
    assert_eq!(target, "/admin/login?redirect=/admin/posts/edit/3?draft=1");
}

#[test]
fn recovery_on_anonymous_session_is_harmless() {
    let mut store = SessionStore::load(MemoryStorage::new());
    let target = recover_unauthorized(&mut store, "/");
    assert!(!store.is_authenticated());
    assert_eq!(target, "/admin/login?redirect=/");
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn from_status_extracts_backend_message() {
    let body = r#"{"timestamp":"2026-01-01T00:00:00","status":404,"error":"Not Found","message":"post not found","path":"/api/v1/posts/9"}"#;
    assert_eq!(
        ApiError::from_status(404, body),
        ApiError::Api { status: 404, message: "post not found".to_owned() }
    );
}

#[test]
fn from_status_falls_back_to_error_field() {
    let body = r#"{"status":500,"error":"Internal Server Error"}"#;
    assert_eq!(
        ApiError::from_status(500, body),
        ApiError::Api { status: 500, message: "Internal Server Error".to_owned() }
    );
}

#[test]
fn from_status_keeps_raw_body_when_not_an_envelope() {
    assert_eq!(
        ApiError::from_status(502, "bad gateway\n"),
        ApiError::Api { status: 502, message: "bad gateway".to_owned() }
    );
}

// =============================================================
// Body codecs
// =============================================================

#[test]
fn decode_rejects_malformed_body() {
    let result: Result<crate::net::types::Post, _> = decode("{not json");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn encode_serializes_camel_case() {
    let payload = crate::net::types::CommentPayload {
        content: "nice post".to_owned(),
        post_id: 12,
        parent_id: None,
    };
    let raw = encode(&payload).unwrap();
    assert!(raw.contains("\"postId\":12"));
    assert!(!raw.contains("parentId"));
}
