//! Threaded comment list with like and moderation actions.
//!
//! Replies come pre-nested from the backend; nodes render recursively.
//! Mutations call the API and then ask the parent to refetch rather than
//! patching the tree locally.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::Http;
use crate::net::types::Comment;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Comment tree for one post. `on_changed` fires after any successful
/// like/unlike/delete so the owner can refetch.
#[component]
pub fn CommentThread(comments: Vec<Comment>, #[prop(into)] on_changed: Callback<()>) -> impl IntoView {
    view! {
        <div class="comment-thread">
            {comments
                .into_iter()
                .map(|comment| comment_node(comment, on_changed))
                .collect_view()}
        </div>
    }
}

fn comment_node(comment: Comment, on_changed: Callback<()>) -> AnyView {
    let http = expect_context::<Http>();
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();

    let id = comment.id;
    let liked = comment.liked_by_current_user;
    let author = comment.author.map(|a| a.username).unwrap_or_else(|| "anonymous".to_owned());
    let date = comment
        .created_at
        .map(|d| d.chars().take(10).collect::<String>())
        .unwrap_or_default();

    let can_like = move || session.with(|s| s.is_authenticated());
    let can_delete = move || session.with(|s| s.is_admin());

    let on_like = move |_| {
        leptos::task::spawn_local(async move {
            let result = if liked {
                api::unlike_comment(http, id).await
            } else {
                api::like_comment(http, id).await
            };
            match result {
                Ok(()) => on_changed.run(()),
                Err(e) => leptos::logging::warn!("comment like failed: {e}"),
            }
        });
    };

    let on_delete = move |_| {
        leptos::task::spawn_local(async move {
            match api::delete_comment(http, id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => leptos::logging::warn!("comment delete failed: {e}"),
            }
        });
    };

    view! {
        <div class="comment">
            <p class="comment__meta">
                <span class="comment__author">{author}</span>
                <span class="comment__date">{date}</span>
            </p>
            <p class="comment__body">{comment.content}</p>
            <div class="comment__actions">
                <Show when=can_like fallback=|| ()>
                    <button class="comment__like" on:click=on_like>
                        {if liked { "Unlike" } else { "Like" }}
                        " ("
                        {comment.like_count}
                        ")"
                    </button>
                </Show>
                <Show when=can_delete fallback=|| ()>
                    <button class="comment__delete" on:click=on_delete>"Delete"</button>
                </Show>
            </div>
            <div class="comment__children">
                {comment
                    .children
                    .into_iter()
                    .map(|child| comment_node(child, on_changed))
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
