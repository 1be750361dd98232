//! Sidebar navigation for the admin area.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Admin section links plus the logout action. Management links only show
/// for admins; the route guard backs this up on direct navigation.
#[component]
pub fn AdminNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();
    let navigate = use_navigate();

    let is_admin = move || session.with(|s| s.is_admin());
    let username =
        move || session.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default());

    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate("/admin/login", Default::default());
    };

    view! {
        <nav class="admin-nav">
            <p class="admin-nav__user">{username}</p>
            <a href="/admin/dashboard">"Dashboard"</a>
            <Show when=is_admin fallback=|| ()>
                <a href="/admin/posts">"Posts"</a>
                <a href="/admin/categories">"Categories"</a>
                <a href="/admin/tags">"Tags"</a>
                <a href="/admin/settings">"Settings"</a>
            </Show>
            <a href="/">"Back to blog"</a>
            <button class="admin-nav__logout" on:click=on_logout>"Log out"</button>
        </nav>
    }
}
