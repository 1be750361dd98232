//! Posts filtered by category slug.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::pagination::Pagination;
use crate::components::post_card::PostCard;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::PageQuery;

#[component]
pub fn CategoryPostsPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let params = use_params_map();

    let page = RwSignal::new(0u32);

    let posts = LocalResource::new(move || {
        let slug = params.read().get("slug").unwrap_or_default();
        let query = PageQuery { page: page.get(), size: 10 };
        async move { api::fetch_posts_by_category(http, &slug, query).await }
    });
    let total_pages = Signal::derive(move || {
        posts.get().and_then(Result::ok).map_or(1, |listing| listing.total_pages.max(1))
    });

    view! {
        <section class="category-page">
            <h1>{move || format!("Category: {}", params.read().get("slug").unwrap_or_default())}</h1>
            <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(listing) => {
                                listing
                                    .content
                                    .into_iter()
                                    .map(|post| view! { <PostCard post=post/> })
                                    .collect_view()
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <Pagination page=page total_pages=total_pages/>
        </section>
    }
}
