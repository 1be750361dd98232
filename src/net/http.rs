//! HTTP wrapper around the backend REST API.
//!
//! Every request funnels through one send path: the bearer token is
//! attached before send, response bodies are unwrapped after receive, and
//! 401/403 recovery lives in exactly one place instead of at every call
//! site. On an authorization failure the wrapper clears the session first
//! and then publishes the login redirect through `forced_redirect`; the
//! `App` component owns the effect that performs the navigation, so this
//! layer never touches the router directly.
//!
//! Real HTTP via `gloo-net` under the `csr` feature; native builds get
//! stubs that fail as transport errors, which keeps the decision logic
//! testable off-browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::routing::guard::login_redirect_target;
use crate::state::session::SessionStore;
use crate::state::storage::{BrowserStorage, SessionStorage};

/// Base path of the backend API.
pub const API_BASE: &str = "/api/v1";

/// Fixed timeout applied uniformly to every request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Shared API client handle. `Copy` so pages can move it into closures
/// freely, like any other signal.
#[derive(Clone, Copy)]
pub struct Http {
    session: RwSignal<SessionStore<BrowserStorage>>,
    forced_redirect: RwSignal<Option<String>>,
}

impl Http {
    /// The navigation dependency is injected here at construction; the
    /// wrapper itself never imports the router.
    pub fn new(
        session: RwSignal<SessionStore<BrowserStorage>>,
        forced_redirect: RwSignal<Option<String>>,
    ) -> Self {
        Self { session, forced_redirect }
    }

    pub async fn get<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let body = self.send_text(Verb::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let raw = self.send_text(Verb::Post, path, Some(encode(body)?)).await?;
        decode(&raw)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let raw = self.send_text(Verb::Put, path, Some(encode(body)?)).await?;
        decode(&raw)
    }

    /// POST whose response body is empty or irrelevant.
    pub async fn post_unit<B: Serialize>(self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_text(Verb::Post, path, Some(encode(body)?)).await.map(drop)
    }

    /// Bodyless POST (e.g. like endpoints).
    pub async fn post_empty(self, path: &str) -> Result<(), ApiError> {
        self.send_text(Verb::Post, path, None).await.map(drop)
    }

    /// PUT whose response body is empty or irrelevant.
    pub async fn put_unit<B: Serialize>(self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_text(Verb::Put, path, Some(encode(body)?)).await.map(drop)
    }

    pub async fn delete(self, path: &str) -> Result<(), ApiError> {
        self.send_text(Verb::Delete, path, None).await.map(drop)
    }

    /// Send one request and return the success body. Authorization failures
    /// are recovered here and never surface beyond `ApiError::Unauthorized`.
    #[cfg_attr(not(feature = "csr"), allow(clippy::unused_async))]
    async fn send_text(
        self,
        verb: Verb,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let url = format!("{API_BASE}{path}");
            let builder = match verb {
                Verb::Get => gloo_net::http::Request::get(&url),
                Verb::Post => gloo_net::http::Request::post(&url),
                Verb::Put => gloo_net::http::Request::put(&url),
                Verb::Delete => gloo_net::http::Request::delete(&url),
            };

            let builder = match self.session.try_with_untracked(|s| s.authorization()).flatten() {
                Some(header) => builder.header("Authorization", &header),
                None => builder,
            };

            let request = match body {
                Some(json) => builder
                    .header("Content-Type", "application/json")
                    .body(json)
                    .map_err(|e| ApiError::Transport(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Transport(e.to_string()))?,
            };

            let send = request.send();
            futures::pin_mut!(send);
            let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
            futures::pin_mut!(timeout);

            let response = match select(send, timeout).await {
                Either::Left((result, _)) => {
                    result.map_err(|e| ApiError::Transport(e.to_string()))?
                }
                Either::Right(((), _)) => return Err(ApiError::Timeout),
            };

            let status = response.status();
            if status == 401 || status == 403 {
                leptos::logging::warn!("api: {status} on {path}, clearing session");
                let intended = current_full_path();
                let target = self
                    .session
                    .try_update(|s| recover_unauthorized(s, &intended))
                    .unwrap_or_else(|| login_redirect_target(&intended));
                self.forced_redirect.set(Some(target));
                return Err(ApiError::Unauthorized);
            }

            let text = response.text().await.unwrap_or_default();
            if !response.ok() {
                leptos::logging::warn!("api: {status} on {path}");
                return Err(ApiError::from_status(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Clear the session, then hand back the login redirect target carrying the
/// originally intended path. The logout always completes before the
/// redirect exists to be issued.
pub(crate) fn recover_unauthorized<S: SessionStorage>(
    store: &mut SessionStore<S>,
    intended: &str,
) -> String {
    store.logout();
    login_redirect_target(intended)
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Path plus query of the page issuing the failed request, used as the
/// post-login return target.
#[cfg(feature = "csr")]
fn current_full_path() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_default();
            let search = location.search().unwrap_or_default();
            format!("{path}{search}")
        })
        .unwrap_or_else(|| "/".to_owned())
}
