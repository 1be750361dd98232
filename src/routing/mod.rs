//! Client-side route table and navigation guard policy.

pub mod guard;
pub mod table;
