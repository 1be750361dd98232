use super::*;
use crate::routing::table;

fn decide(path: &str, authenticated: bool, admin: bool) -> GuardDecision {
    let route = table::match_path(path).expect("path must be in the table");
    evaluate(path, route, authenticated, admin)
}

// =============================================================
// Unauthenticated rows
// =============================================================

#[test]
fn anonymous_reader_is_permitted_on_public_routes() {
    assert_eq!(decide("/", false, false), GuardDecision::Permit);
    assert_eq!(decide("/post/intro", false, false), GuardDecision::Permit);
    assert_eq!(decide("/archives", false, false), GuardDecision::Permit);
}

#[test]
fn anonymous_user_may_open_login_and_register() {
    assert_eq!(decide("/admin/login", false, false), GuardDecision::Permit);
    assert_eq!(decide("/admin/register", false, false), GuardDecision::Permit);
}

#[test]
fn guarded_route_redirects_to_login_with_redirect_param() {
    match decide("/admin/posts", false, false) {
        GuardDecision::Redirect { target, notice } => {
            assert_eq!(target, "/admin/login?redirect=/admin/posts");
            assert!(notice.unwrap().message.contains("log in"));
        }
        GuardDecision::Permit => panic!("guarded route permitted anonymously"),
    }
}

#[test]
fn redirect_param_preserves_the_full_target_path() {
    match decide("/admin/posts/edit/42", false, false) {
        GuardDecision::Redirect { target, .. } => {
            assert_eq!(target, "/admin/login?redirect=/admin/posts/edit/42");
        }
        GuardDecision::Permit => panic!("guarded route permitted anonymously"),
    }
}

#[test]
fn redirect_param_keeps_query_string() {
    let route = table::find("/admin/posts").unwrap();
    match evaluate("/admin/posts?page=2", route, false, false) {
        GuardDecision::Redirect { target, .. } => {
            assert_eq!(target, "/admin/login?redirect=/admin/posts?page=2");
        }
        GuardDecision::Permit => panic!("guarded route permitted anonymously"),
    }
}

// The auth check runs before the admin check, so an anonymous request to
// an admin route gets the login redirect, not the permission notice.
#[test]
fn anonymous_request_to_admin_route_hits_the_auth_row() {
    match decide("/admin/settings", false, false) {
        GuardDecision::Redirect { target, notice } => {
            assert!(target.starts_with("/admin/login?redirect="));
            assert!(notice.unwrap().message.contains("log in"));
        }
        GuardDecision::Permit => panic!("admin route permitted anonymously"),
    }
}

// =============================================================
// Authenticated rows
// =============================================================

#[test]
fn authenticated_user_is_bounced_off_entry_routes() {
    for path in ["/admin/login", "/admin/register"] {
        match decide(path, true, false) {
            GuardDecision::Redirect { target, notice } => {
                assert_eq!(target, table::LANDING_PATH);
                assert!(notice.is_none());
            }
            GuardDecision::Permit => panic!("{path} permitted while authenticated"),
        }
    }
}

#[test]
fn non_admin_never_reaches_admin_routes() {
    for path in ["/admin/posts", "/admin/categories", "/admin/tags", "/admin/settings"] {
        match decide(path, true, false) {
            GuardDecision::Redirect { target, notice } => {
                assert_eq!(target, table::LANDING_PATH);
                assert!(notice.unwrap().message.contains("permission"));
            }
            GuardDecision::Permit => panic!("{path} permitted for non-admin"),
        }
    }
}

#[test]
fn admin_is_permitted_on_admin_routes() {
    assert_eq!(decide("/admin/posts", true, true), GuardDecision::Permit);
    assert_eq!(decide("/admin/settings", true, true), GuardDecision::Permit);
}

#[test]
fn authenticated_user_is_permitted_on_auth_only_routes() {
    assert_eq!(decide("/admin/dashboard", true, false), GuardDecision::Permit);
    assert_eq!(decide("/admin/dashboard", true, true), GuardDecision::Permit);
}

#[test]
fn authenticated_user_is_permitted_on_public_routes() {
    assert_eq!(decide("/", true, false), GuardDecision::Permit);
    assert_eq!(decide("/tag/rust", true, true), GuardDecision::Permit);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn login_redirect_target_formats_query() {
    assert_eq!(
        login_redirect_target("/admin/tags"),
        "/admin/login?redirect=/admin/tags"
    );
}
