//! Home page: paged list of published posts.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::post_card::PostCard;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::PageQuery;

#[component]
pub fn HomePage() -> impl IntoView {
    let http = expect_context::<Http>();

    let page = RwSignal::new(0u32);

    let posts = LocalResource::new(move || {
        api::fetch_posts(http, PageQuery { page: page.get(), size: 10 })
    });
    let total_pages = Signal::derive(move || {
        posts.get().and_then(Result::ok).map_or(1, |listing| listing.total_pages.max(1))
    });

    view! {
        <section class="home-page">
            <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                if listing.content.is_empty() {
                                    view! { <p class="empty">"No posts yet."</p> }.into_any()
                                } else {
                                    listing
                                        .content
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post/> })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <Pagination page=page total_pages=total_pages/>
        </section>
    }
}
