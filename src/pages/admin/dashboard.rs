//! Admin dashboard: landing page for authenticated users.

use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::PageQuery;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let http = expect_context::<Http>();

    // One-element page just for the totals.
    let posts = LocalResource::new(move || api::fetch_posts(http, PageQuery { page: 0, size: 1 }));

    view! {
        <div class="admin-page">
            <AdminNav/>
            <section class="admin-page__content">
                <h1>"Dashboard"</h1>
                <Suspense fallback=move || view! { <p class="loading">"Loading..."</p> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| match result {
                                Ok(listing) => {
                                    view! {
                                        <p class="admin-dashboard__stat">
                                            {format!("{} posts published", listing.total_elements)}
                                        </p>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
