//! Small shared utilities.

pub mod markdown;
