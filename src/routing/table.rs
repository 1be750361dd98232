//! Static route table.
//!
//! Built once at compile time and immutable thereafter. Guard metadata
//! lives here so the guard never re-derives access rules at runtime.
//! Structural invariant: every admin-gated route is also auth-gated.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Path of the login page, the redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/admin/login";

/// Default landing route for an authenticated user.
pub const LANDING_PATH: &str = "/admin/dashboard";

/// One entry of the static route tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; `:name` segments match any single segment.
    pub path: &'static str,
    pub name: &'static str,
    /// Route is only reachable with a session token.
    pub requires_auth: bool,
    /// Route additionally requires the admin role.
    pub requires_admin: bool,
    /// Login/register entry points, bounced when already authenticated.
    pub is_entry: bool,
}

const fn public(path: &'static str, name: &'static str) -> RouteDescriptor {
    RouteDescriptor { path, name, requires_auth: false, requires_admin: false, is_entry: false }
}

const fn entry(path: &'static str, name: &'static str) -> RouteDescriptor {
    RouteDescriptor { path, name, requires_auth: false, requires_admin: false, is_entry: true }
}

const fn authed(path: &'static str, name: &'static str) -> RouteDescriptor {
    RouteDescriptor { path, name, requires_auth: true, requires_admin: false, is_entry: false }
}

const fn admin(path: &'static str, name: &'static str) -> RouteDescriptor {
    RouteDescriptor { path, name, requires_auth: true, requires_admin: true, is_entry: false }
}

/// The whole route tree. Order matters only for documentation; matching is
/// exact per pattern.
pub static ROUTES: &[RouteDescriptor] = &[
    public("/", "Home"),
    public("/post/:slug", "PostDetail"),
    public("/category/:slug", "CategoryPosts"),
    public("/tag/:slug", "TagPosts"),
    public("/archives", "Archives"),
    public("/about", "About"),
    entry("/admin/login", "AdminLogin"),
    entry("/admin/register", "AdminRegister"),
    authed("/admin/dashboard", "AdminDashboard"),
    admin("/admin/posts", "AdminPosts"),
    admin("/admin/posts/create", "AdminPostCreate"),
    admin("/admin/posts/edit/:id", "AdminPostEdit"),
    admin("/admin/categories", "AdminCategories"),
    admin("/admin/tags", "AdminTags"),
    admin("/admin/settings", "AdminSettings"),
];

/// Look up a descriptor by its exact pattern.
pub fn find(pattern: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|r| r.path == pattern)
}

/// Match a concrete path against the table, `:param` segments wildcard.
pub fn match_path(path: &str) -> Option<&'static RouteDescriptor> {
    let target: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    ROUTES.iter().find(|route| {
        let pattern: Vec<&str> = route.path.trim_end_matches('/').split('/').collect();
        pattern.len() == target.len()
            && pattern
                .iter()
                .zip(&target)
                .all(|(p, t)| p.starts_with(':') || p == t)
    })
}
