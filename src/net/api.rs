//! Typed request builders for the backend endpoints.
//!
//! Thin by design: path and method construction only, no logic. Auth,
//! timeouts, and error mapping all live in the HTTP wrapper.

use crate::net::error::ApiError;
use crate::net::http::Http;
use crate::net::types::*;

// ---------------------------------------------------------------
// Posts
// ---------------------------------------------------------------

pub async fn fetch_posts(http: Http, query: PageQuery) -> Result<Page<Post>, ApiError> {
    http.get(&format!("/posts?{}", query.to_query())).await
}

pub async fn fetch_post_by_slug(http: Http, slug: &str) -> Result<Post, ApiError> {
    http.get(&format!("/posts/slug/{slug}")).await
}

pub async fn fetch_posts_by_category(
    http: Http,
    category_slug: &str,
    query: PageQuery,
) -> Result<Page<Post>, ApiError> {
    http.get(&format!("/posts/category/{category_slug}?{}", query.to_query())).await
}

pub async fn fetch_posts_by_tag(
    http: Http,
    tag_slug: &str,
    query: PageQuery,
) -> Result<Page<Post>, ApiError> {
    http.get(&format!("/posts/tag/{tag_slug}?{}", query.to_query())).await
}

pub async fn fetch_archives(http: Http) -> Result<Vec<ArchiveEntry>, ApiError> {
    http.get("/posts/archives").await
}

// Admin post management; permissions are enforced server-side.

pub async fn fetch_post_by_id(http: Http, id: i64) -> Result<Post, ApiError> {
    http.get(&format!("/posts/{id}")).await
}

pub async fn create_post(http: Http, payload: &PostPayload) -> Result<Post, ApiError> {
    http.post("/posts", payload).await
}

pub async fn update_post(http: Http, id: i64, payload: &PostPayload) -> Result<Post, ApiError> {
    http.put(&format!("/posts/{id}"), payload).await
}

pub async fn delete_post(http: Http, id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/posts/{id}")).await
}

// ---------------------------------------------------------------
// Comments
// ---------------------------------------------------------------

pub async fn fetch_comments_by_post(http: Http, post_id: i64) -> Result<Vec<Comment>, ApiError> {
    http.get(&format!("/comments/post/{post_id}")).await
}

pub async fn create_comment(http: Http, payload: &CommentPayload) -> Result<Comment, ApiError> {
    http.post("/comments", payload).await
}

pub async fn delete_comment(http: Http, comment_id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/comments/{comment_id}")).await
}

pub async fn like_comment(http: Http, comment_id: i64) -> Result<(), ApiError> {
    http.post_empty(&format!("/comments/{comment_id}/like")).await
}

pub async fn unlike_comment(http: Http, comment_id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/comments/{comment_id}/like")).await
}

// ---------------------------------------------------------------
// Auth
// ---------------------------------------------------------------

pub async fn login(http: Http, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    http.post("/auth/login", credentials).await
}

pub async fn register(http: Http, info: &RegisterRequest) -> Result<(), ApiError> {
    http.post_unit("/auth/register", info).await
}

pub async fn change_password(http: Http, payload: &PasswordChangeRequest) -> Result<(), ApiError> {
    http.put_unit("/users/change-password", payload).await
}

// ---------------------------------------------------------------
// Admin metadata
// ---------------------------------------------------------------

pub async fn fetch_categories(http: Http) -> Result<Vec<Category>, ApiError> {
    http.get("/admin/categories").await
}

pub async fn create_category(http: Http, name: &str, slug: &str) -> Result<Category, ApiError> {
    http.post("/admin/categories", &serde_json::json!({ "name": name, "slug": slug })).await
}

pub async fn update_category(
    http: Http,
    id: i64,
    name: &str,
    slug: &str,
) -> Result<Category, ApiError> {
    http.put(
        &format!("/admin/categories/{id}"),
        &serde_json::json!({ "name": name, "slug": slug }),
    )
    .await
}

pub async fn delete_category(http: Http, id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/admin/categories/{id}")).await
}

pub async fn fetch_tags(http: Http) -> Result<Vec<Tag>, ApiError> {
    http.get("/admin/tags").await
}

pub async fn create_tag(http: Http, name: &str) -> Result<Tag, ApiError> {
    http.post("/admin/tags", &serde_json::json!({ "name": name })).await
}

pub async fn delete_tag(http: Http, id: i64) -> Result<(), ApiError> {
    http.delete(&format!("/admin/tags/{id}")).await
}
