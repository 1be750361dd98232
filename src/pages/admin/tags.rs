//! Tag management: list, create, delete.

use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::net::api;
use crate::net::http::Http;

#[component]
pub fn AdminTagsPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let tags = LocalResource::new(move || api::fetch_tags(http));

    let new_name = RwSignal::new(String::new());

    let on_create = move |_| {
        let name = new_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::create_tag(http, &name).await {
                Ok(_) => {
                    new_name.set(String::new());
                    tags.refetch();
                }
                Err(e) => leptos::logging::warn!("tag create failed: {e}"),
            }
        });
    };

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_tag(http, id).await {
                Ok(()) => tags.refetch(),
                Err(e) => leptos::logging::warn!("tag delete failed: {e}"),
            }
        });
    };

    view! {
        <div class="admin-page">
            <AdminNav/>
            <section class="admin-page__content">
                <h1>"Tags"</h1>

                <div class="meta-form">
                    <input
                        type="text"
                        placeholder="Tag name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_create>"Add tag"</button>
                </div>

                <Suspense fallback=move || view! { <p class="loading">"Loading..."</p> }>
                    {move || {
                        tags.get()
                            .map(|result| match result {
                                Ok(list) => {
                                    list.into_iter()
                                        .map(|tag| {
                                            let id = tag.id;
                                            view! {
                                                <div class="meta-row">
                                                    <span>{tag.name}</span>
                                                    <span class="meta-row__slug">{tag.slug}</span>
                                                    <button on:click=move |_| on_delete(id)>"Delete"</button>
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
        </div>
    }
}
