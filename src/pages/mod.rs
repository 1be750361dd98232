//! Route components, one per entry in the route table.

pub mod about;
pub mod admin;
pub mod archives;
pub mod category;
pub mod home;
pub mod login;
pub mod not_found;
pub mod post_detail;
pub mod register;
pub mod tag;
