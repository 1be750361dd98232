//! Network layer: HTTP wrapper, error taxonomy, wire types, and the typed
//! API surface over the backend REST endpoints.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
