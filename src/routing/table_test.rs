use super::*;

// =============================================================
// Structural invariants
// =============================================================

// Admin-gated routes must always be auth-gated, so the guard's auth check
// can run first without re-deriving anything at runtime.
#[test]
fn admin_routes_are_always_auth_gated() {
    for route in ROUTES {
        if route.requires_admin {
            assert!(route.requires_auth, "{} is admin-gated but not auth-gated", route.path);
        }
    }
}

#[test]
fn entry_routes_are_unguarded() {
    for route in ROUTES {
        if route.is_entry {
            assert!(!route.requires_auth, "{} is an entry route", route.path);
        }
    }
}

#[test]
fn route_names_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name);
            assert_ne!(a.path, b.path);
        }
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_returns_exact_pattern() {
    let route = find("/admin/posts/edit/:id").unwrap();
    assert_eq!(route.name, "AdminPostEdit");
    assert!(find("/admin/posts/edit/42").is_none());
}

#[test]
fn match_path_resolves_static_routes() {
    assert_eq!(match_path("/").unwrap().name, "Home");
    assert_eq!(match_path("/archives").unwrap().name, "Archives");
    assert_eq!(match_path("/admin/dashboard").unwrap().name, "AdminDashboard");
}

#[test]
fn match_path_substitutes_params() {
    assert_eq!(match_path("/post/hello-world").unwrap().name, "PostDetail");
    assert_eq!(match_path("/category/rust").unwrap().name, "CategoryPosts");
    assert_eq!(match_path("/admin/posts/edit/7").unwrap().name, "AdminPostEdit");
}

#[test]
fn match_path_misses_unknown_paths() {
    assert!(match_path("/no/such/route").is_none());
    assert!(match_path("/post").is_none());
    assert!(match_path("/post/a/b").is_none());
}
