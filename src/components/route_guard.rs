//! Navigation guard wrapper component.
//!
//! Wraps each guarded page; the policy itself lives in `routing::guard`.
//! The decision is recomputed whenever the session changes, so an expiring
//! session bounces the user off a protected page without a reload. This is
//! a UX guard only; the API enforces real access control.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::guard::{self, GuardDecision, Notice};
use crate::routing::table;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Renders children only when the route guard permits the navigation;
/// otherwise issues the guard's redirect and publishes its notice.
#[component]
pub fn Guarded(
    /// Pattern of the target route in the static route table.
    route: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();
    let notices = expect_context::<RwSignal<Option<Notice>>>();
    let navigate = use_navigate();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    let descriptor = table::find(route);

    let decision = Memo::new(move |_| {
        let Some(descriptor) = descriptor else {
            return GuardDecision::Permit;
        };
        // Keep the query string so the post-login return lands exactly
        // where the user was headed.
        let mut path = pathname.get();
        let query = search.get();
        if !query.is_empty() {
            if !query.starts_with('?') {
                path.push('?');
            }
            path.push_str(&query);
        }
        session.with(|s| guard::evaluate(&path, descriptor, s.is_authenticated(), s.is_admin()))
    });

    Effect::new(move |_| {
        if let GuardDecision::Redirect { target, notice } = decision.get() {
            if let Some(notice) = notice {
                notices.set(Some(notice));
            }
            navigate(&target, Default::default());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Permit fallback=|| ()>
            {children()}
        </Show>
    }
}
