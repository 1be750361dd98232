//! Shared view components.

pub mod admin_nav;
pub mod comment_thread;
pub mod notice_banner;
pub mod pagination;
pub mod post_card;
pub mod route_guard;
