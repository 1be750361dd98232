use super::*;

// =============================================================
// Wire format (camelCase, Spring DTO shapes)
// =============================================================

#[test]
fn post_decodes_from_backend_json() {
    let raw = r##"{
        "id": 7,
        "title": "Hello",
        "contentMd": "# hi",
        "contentHtml": null,
        "slug": "hello",
        "author": {"id": 1, "username": "chirp"},
        "categories": [{"id": 2, "name": "Rust", "slug": "rust"}],
        "tags": [],
        "status": "PUBLISHED",
        "publishedAt": "2026-01-02T03:04:05",
        "createdAt": "2026-01-01T00:00:00",
        "updatedAt": "2026-01-02T00:00:00"
    }"##;

    let post: Post = serde_json::from_str(raw).unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.content_md.as_deref(), Some("# hi"));
    assert_eq!(post.author.unwrap().username, "chirp");
    assert_eq!(post.categories[0].slug, "rust");
}

#[test]
fn post_tolerates_missing_optional_fields() {
    let raw = r#"{"id": 1, "title": "Bare", "slug": "bare"}"#;
    let post: Post = serde_json::from_str(raw).unwrap();
    assert!(post.content_md.is_none());
    assert!(post.author.is_none());
    assert!(post.categories.is_empty());
}

#[test]
fn page_envelope_decodes() {
    let raw = r#"{
        "content": [{"id": 1, "title": "A", "slug": "a"}],
        "totalElements": 31,
        "totalPages": 4,
        "number": 0,
        "size": 10
    }"#;

    let page: Page<Post> = serde_json::from_str(raw).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_elements, 31);
    assert_eq!(page.total_pages, 4);
}

#[test]
fn comment_tree_decodes_nested_children() {
    let raw = r#"{
        "id": 5,
        "content": "parent",
        "parentId": null,
        "likeCount": 2,
        "likedByCurrentUser": true,
        "children": [
            {"id": 6, "content": "reply", "parentId": 5, "children": []}
        ]
    }"#;

    let comment: Comment = serde_json::from_str(raw).unwrap();
    assert_eq!(comment.like_count, 2);
    assert!(comment.liked_by_current_user);
    assert_eq!(comment.children[0].parent_id, Some(5));
    assert!(comment.children[0].children.is_empty());
}

#[test]
fn login_response_decodes() {
    let raw = r#"{"accessToken": "tok", "tokenType": "Bearer", "username": "chirp", "role": "ROLE_ADMIN"}"#;
    let response: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.access_token, "tok");
    assert_eq!(response.role, "ROLE_ADMIN");
}

#[test]
fn password_change_serializes_camel_case() {
    let raw = serde_json::to_string(&PasswordChangeRequest {
        old_password: "a".to_owned(),
        new_password: "b".to_owned(),
    })
    .unwrap();
    assert!(raw.contains("oldPassword"));
    assert!(raw.contains("newPassword"));
}

#[test]
fn post_payload_serializes_id_sets() {
    let raw = serde_json::to_string(&PostPayload {
        title: "T".to_owned(),
        content_md: "body".to_owned(),
        slug: "t".to_owned(),
        category_ids: vec![1, 2],
        tag_ids: vec![],
    })
    .unwrap();
    assert!(raw.contains("\"categoryIds\":[1,2]"));
    assert!(raw.contains("\"tagIds\":[]"));
}

// =============================================================
// Page query
// =============================================================

#[test]
fn page_query_formats_query_string() {
    assert_eq!(PageQuery::default().to_query(), "page=0&size=10");
    assert_eq!(PageQuery { page: 3, size: 25 }.to_query(), "page=3&size=25");
}
