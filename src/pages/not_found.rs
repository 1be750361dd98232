//! Catch-all 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"404"</h1>
            <p>"That page does not exist."</p>
            <a href="/">"Back to the front page"</a>
        </section>
    }
}
