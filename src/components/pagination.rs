//! Previous/next pager for paged listings.

use leptos::prelude::*;

/// Pager bound to a zero-based page signal.
#[component]
pub fn Pagination(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    let at_start = move || page.get() == 0;
    let at_end = move || page.get() + 1 >= total_pages.get().max(1);

    view! {
        <nav class="pagination">
            <button
                class="pagination__prev"
                disabled=at_start
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "Previous"
            </button>
            <span class="pagination__status">
                {move || format!("Page {} of {}", page.get() + 1, total_pages.get().max(1))}
            </span>
            <button
                class="pagination__next"
                disabled=at_end
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </nav>
    }
}
