//! Post summary card for list pages.

use leptos::prelude::*;

use crate::net::types::Post;

/// One post in a listing: linked title, date, author, and taxonomy chips.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/post/{}", post.slug);
    let date = post
        .published_at
        .or(post.created_at)
        .map(|d| d.chars().take(10).collect::<String>())
        .unwrap_or_default();
    let author = post.author.map(|a| a.username).unwrap_or_default();

    view! {
        <article class="post-card">
            <h2 class="post-card__title">
                <a href=href>{post.title}</a>
            </h2>
            <p class="post-card__meta">
                <span>{date}</span>
                <span>{author}</span>
            </p>
            <p class="post-card__taxonomy">
                {post
                    .categories
                    .into_iter()
                    .map(|c| {
                        view! {
                            <a class="chip chip--category" href=format!("/category/{}", c.slug)>
                                {c.name}
                            </a>
                        }
                    })
                    .collect_view()}
                {post
                    .tags
                    .into_iter()
                    .map(|t| {
                        view! {
                            <a class="chip chip--tag" href=format!("/tag/{}", t.slug)>{t.name}</a>
                        }
                    })
                    .collect_view()}
            </p>
        </article>
    }
}
