//! About page. Static content.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>"A small personal blog about software, mostly systems programming."</p>
            <p>"Posts are written in Markdown and served by a separate API backend."</p>
        </section>
    }
}
