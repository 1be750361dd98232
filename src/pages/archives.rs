//! Archive page: posts grouped by month.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::Http;

#[component]
pub fn ArchivesPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let archives = LocalResource::new(move || api::fetch_archives(http));

    view! {
        <section class="archives-page">
            <h1>"Archives"</h1>
            <Suspense fallback=move || view! { <p class="loading">"Loading archives..."</p> }>
                {move || {
                    archives
                        .get()
                        .map(|result| match result {
                            Ok(entries) => {
                                entries
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <div class="archives-page__month">
                                                <h2>{format!("{}-{:02}", entry.year, entry.month)}</h2>
                                                <ul>
                                                    {entry
                                                        .posts
                                                        .into_iter()
                                                        .map(|post| {
                                                            view! {
                                                                <li>
                                                                    <a href=format!(
                                                                        "/post/{}",
                                                                        post.slug,
                                                                    )>{post.title}</a>
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
