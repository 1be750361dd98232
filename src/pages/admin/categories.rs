//! Category management: list, create, rename, delete.

use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::net::api;
use crate::net::http::Http;

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let categories = LocalResource::new(move || api::fetch_categories(http));

    let new_name = RwSignal::new(String::new());
    let new_slug = RwSignal::new(String::new());
    // Row currently in edit mode, with its draft values.
    let editing = RwSignal::new(None::<i64>);
    let edit_name = RwSignal::new(String::new());
    let edit_slug = RwSignal::new(String::new());

    let on_create = move |_| {
        let name = new_name.get_untracked().trim().to_owned();
        let slug = new_slug.get_untracked().trim().to_owned();
        if name.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::create_category(http, &name, &slug).await {
                Ok(_) => {
                    new_name.set(String::new());
                    new_slug.set(String::new());
                    categories.refetch();
                }
                Err(e) => leptos::logging::warn!("category create failed: {e}"),
            }
        });
    };

    let on_save_edit = move |id: i64| {
        let name = edit_name.get_untracked();
        let slug = edit_slug.get_untracked();
        leptos::task::spawn_local(async move {
            match api::update_category(http, id, &name, &slug).await {
                Ok(_) => {
                    editing.set(None);
                    categories.refetch();
                }
                Err(e) => leptos::logging::warn!("category update failed: {e}"),
            }
        });
    };

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_category(http, id).await {
                Ok(()) => categories.refetch(),
                Err(e) => leptos::logging::warn!("category delete failed: {e}"),
            }
        });
    };

    view! {
        <div class="admin-page">
            <AdminNav/>
            <section class="admin-page__content">
                <h1>"Categories"</h1>

                <div class="meta-form">
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Slug"
                        prop:value=move || new_slug.get()
                        on:input=move |ev| new_slug.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=on_create>"Add category"</button>
                </div>

                <Suspense fallback=move || view! { <p class="loading">"Loading..."</p> }>
                    {move || {
                        categories
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    list.into_iter()
                                        .map(|category| {
                                            let id = category.id;
                                            let name = category.name.clone();
                                            let slug = category.slug.clone();
                                            view! {
                                                <div class="meta-row">
                                                    <Show
                                                        when=move || editing.get() == Some(id)
                                                        fallback=move || {
                                                            let name = name.clone();
                                                            let slug = slug.clone();
                                                            view! {
                                                                <span>{name.clone()}</span>
                                                                <span class="meta-row__slug">{slug.clone()}</span>
                                                            }
                                                        }
                                                    >
                                                        <input
                                                            type="text"
                                                            prop:value=move || edit_name.get()
                                                            on:input=move |ev| edit_name.set(event_target_value(&ev))
                                                        />
                                                        <input
                                                            type="text"
                                                            prop:value=move || edit_slug.get()
                                                            on:input=move |ev| edit_slug.set(event_target_value(&ev))
                                                        />
                                                        <button on:click=move |_| on_save_edit(id)>"Save"</button>
                                                    </Show>
                                                    <button on:click={
                                                        let name = category.name.clone();
                                                        let slug = category.slug.clone();
                                                        move |_| {
                                                            edit_name.set(name.clone());
                                                            edit_slug.set(slug.clone());
                                                            editing.set(Some(id));
                                                        }
                                                    }>"Edit"</button>
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
