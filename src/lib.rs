//! # blog-client
//!
//! Leptos + WASM front-end for a Markdown blog served by a separate REST
//! backend under `/api/v1`. The crate is a pure client-rendered SPA: the
//! session store persists the bearer token and user profile in
//! `localStorage`, every API call goes through one HTTP wrapper that
//! attaches the token and recovers 401/403 centrally, and navigation is
//! gated by a static route table with a small guard policy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
