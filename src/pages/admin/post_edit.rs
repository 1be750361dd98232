//! Post editor, shared by the create and edit routes.
//!
//! Edit mode loads the existing post by id and pre-fills the form; create
//! mode starts blank. Category and tag assignment use checkbox lists over
//! the admin metadata endpoints.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::admin_nav::AdminNav;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::PostPayload;

fn toggle(selected: RwSignal<Vec<i64>>, id: i64) {
    selected.update(|ids| {
        if let Some(index) = ids.iter().position(|&i| i == id) {
            ids.remove(index);
        } else {
            ids.push(id);
        }
    });
}

#[component]
pub fn AdminPostEditPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let navigate = use_navigate();
    let params = use_params_map();

    let post_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let title = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let selected_categories = RwSignal::new(Vec::<i64>::new());
    let selected_tags = RwSignal::new(Vec::<i64>::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let categories = LocalResource::new(move || api::fetch_categories(http));
    let tags = LocalResource::new(move || api::fetch_tags(http));

    // Pre-fill the form when editing an existing post.
    let existing = LocalResource::new(move || {
        let id = post_id();
        async move {
            match id {
                Some(id) => api::fetch_post_by_id(http, id).await.map(Some),
                None => Ok(None),
            }
        }
    });
    Effect::new(move |_| {
        if let Some(Ok(Some(post))) = existing.get() {
            title.set(post.title);
            slug.set(post.slug);
            content.set(post.content_md.unwrap_or_default());
            selected_categories.set(post.categories.iter().map(|c| c.id).collect());
            selected_tags.set(post.tags.iter().map(|t| t.id).collect());
        }
    });

    let on_save = move |_| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let payload = PostPayload {
            title: title.get_untracked(),
            content_md: content.get_untracked(),
            slug: slug.get_untracked(),
            category_ids: selected_categories.get_untracked(),
            tag_ids: selected_tags.get_untracked(),
        };
        let id = post_id();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_post(http, id, &payload).await,
                None => api::create_post(http, &payload).await,
            };
            match result {
                Ok(_) => navigate("/admin/posts", Default::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="admin-page">
            <AdminNav/>
            <section class="admin-page__content">
                <h1>{move || if post_id().is_some() { "Edit post" } else { "New post" }}</h1>

                <div class="post-editor">
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Slug"
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(event_target_value(&ev))
                    />
                    <textarea
                        class="post-editor__markdown"
                        placeholder="Write in Markdown"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>

                    <fieldset class="post-editor__categories">
                        <legend>"Categories"</legend>
                        <Suspense fallback=|| ()>
                            {move || {
                                categories
                                    .get()
                                    .map(|result| match result {
                                        Ok(list) => {
                                            list.into_iter()
                                                .map(|category| {
                                                    let id = category.id;
                                                    view! {
                                                        <label>
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    selected_categories.get().contains(&id)
                                                                }
                                                                on:change=move |_| toggle(selected_categories, id)
                                                            />
                                                            {category.name}
                                                        </label>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                        Err(e) => {
                                            view! { <p class="error">{e.to_string()}</p> }.into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </fieldset>

                    <fieldset class="post-editor__tags">
                        <legend>"Tags"</legend>
                        <Suspense fallback=|| ()>
                            {move || {
                                tags.get()
                                    .map(|result| match result {
                                        Ok(list) => {
                                            list.into_iter()
                                                .map(|tag| {
                                                    let id = tag.id;
                                                    view! {
                                                        <label>
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || selected_tags.get().contains(&id)
                                                                on:change=move |_| toggle(selected_tags, id)
                                                            />
                                                            {tag.name}
                                                        </label>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                        Err(e) => {
                                            view! { <p class="error">{e.to_string()}</p> }.into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </fieldset>

                    <button class="btn btn--primary" disabled=move || pending.get() on:click=on_save>
                        "Save"
                    </button>
                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <p class="error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                </div>
            </section>
        </div>
    }
}
