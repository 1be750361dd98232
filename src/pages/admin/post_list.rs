//! Admin post management: list, edit links, delete.

use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::PageQuery;

#[component]
pub fn AdminPostListPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let page = RwSignal::new(0u32);

    let posts = LocalResource::new(move || {
        api::fetch_posts(http, PageQuery { page: page.get(), size: 20 })
    });
    let total_pages = Signal::derive(move || {
        posts.get().and_then(Result::ok).map_or(1, |listing| listing.total_pages.max(1))
    });

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_post(http, id).await {
                Ok(()) => posts.refetch(),
                Err(e) => leptos::logging::warn!("post delete failed: {e}"),
            }
        });
    };

    view! {
        <div class="admin-page">
            <AdminNav/>
            <section class="admin-page__content">
                <header class="admin-page__header">
                    <h1>"Posts"</h1>
                    <a class="btn btn--primary" href="/admin/posts/create">"New post"</a>
                </header>
                <Suspense fallback=move || view! { <p class="loading">"Loading posts..."</p> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| match result {
                                Ok(listing) => {
                                    view! {
                                        <table class="admin-table">
                                            <thead>
                                                <tr>
                                                    <th>"Title"</th>
                                                    <th>"Status"</th>
                                                    <th>"Published"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {listing
                                                    .content
                                                    .into_iter()
                                                    .map(|post| {
                                                        let id = post.id;
                                                        view! {
                                                            <tr>
                                                                <td>{post.title}</td>
                                                                <td>{post.status.unwrap_or_default()}</td>
                                                                <td>{post.published_at.unwrap_or_default()}</td>
                                                                <td>
                                                                    <a href=format!(
                                                                        "/admin/posts/edit/{id}",
                                                                    )>"Edit"</a>
                                                                    <button on:click=move |_| on_delete(
                                                                        id,
                                                                    )>"Delete"</button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
                <Pagination page=page total_pages=total_pages/>
            </section>
        </div>
    }
}
