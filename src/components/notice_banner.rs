//! Advisory banner for guard and auth notices.

use leptos::prelude::*;

use crate::routing::guard::Notice;

/// Shows the current advisory notice, dismissable with one click.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<Option<Notice>>>();

    view! {
        <Show when=move || notices.get().is_some() fallback=|| ()>
            <div class="notice-banner" role="alert">
                <span>{move || notices.get().map(|n| n.message).unwrap_or_default()}</span>
                <button class="notice-banner__dismiss" on:click=move |_| notices.set(None)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
