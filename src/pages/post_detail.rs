//! Post detail page: rendered Markdown body plus the comment thread.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_thread::CommentThread;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::CommentPayload;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;
use crate::util::markdown;

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();
    let params = use_params_map();

    let slug = move || params.read().get("slug").unwrap_or_default();

    let post = LocalResource::new(move || {
        let slug = slug();
        async move { api::fetch_post_by_slug(http, &slug).await }
    });

    // Post id for the comment endpoints, known once the post loads.
    let post_id = RwSignal::new(None::<i64>);
    Effect::new(move |_| {
        if let Some(Ok(loaded)) = post.get() {
            post_id.set(Some(loaded.id));
        }
    });

    let comments = LocalResource::new(move || {
        let id = post_id.get();
        async move {
            match id {
                Some(id) => api::fetch_comments_by_post(http, id).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let on_comments_changed = Callback::new(move |()| comments.refetch());

    let draft = RwSignal::new(String::new());
    let can_comment = move || session.with(|s| s.is_authenticated());
    let on_submit_comment = move |_| {
        let content = draft.get_untracked().trim().to_owned();
        let Some(id) = post_id.get_untracked() else { return };
        if content.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let payload = CommentPayload { content, post_id: id, parent_id: None };
            match api::create_comment(http, &payload).await {
                Ok(_) => {
                    draft.set(String::new());
                    comments.refetch();
                }
                Err(e) => leptos::logging::warn!("comment create failed: {e}"),
            }
        });
    };

    view! {
        <article class="post-detail">
            <Suspense fallback=move || view! { <p class="loading">"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(post) => {
                                let body = markdown::render(post.content_md.as_deref());
                                view! {
                                    <div>
                                        <h1 class="post-detail__title">{post.title}</h1>
                                        <div class="post-detail__body" inner_html=body></div>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>

            <section class="post-detail__comments">
                <h2>"Comments"</h2>
                <Suspense fallback=move || view! { <p class="loading">"Loading comments..."</p> }>
                    {move || {
                        comments
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <CommentThread comments=list on_changed=on_comments_changed/>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                            })
                    }}
                </Suspense>

                <Show
                    when=can_comment
                    fallback=|| {
                        view! {
                            <p class="comment-form__hint">
                                <a href="/admin/login">"Log in"</a>
                                " to join the discussion."
                            </p>
                        }
                    }
                >
                    <div class="comment-form">
                        <textarea
                            placeholder="Write a comment"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        ></textarea>
                        <button on:click=on_submit_comment>"Post comment"</button>
                    </div>
                </Show>
            </section>
        </article>
    }
}
