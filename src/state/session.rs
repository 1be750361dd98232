//! Session store: the current bearer token and cached user profile.
//!
//! DESIGN
//! ======
//! The store is a plain struct owning its storage backend, held in an
//! `RwSignal` context by the app so views react to login/logout. Every
//! mutation goes through `set_token`/`set_user`, which mirror the
//! in-memory value into durable storage synchronously. `token` and `user`
//! are two independently settable fields; nothing forces them to clear
//! together outside `logout`, and that looser contract is kept on purpose
//! (see the session tests).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::storage::SessionStorage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Role string the backend assigns to administrators.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Cached profile of the logged-in user, as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: String,
}

/// Authentication state persisted across page reloads.
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    token: Option<String>,
    user: Option<SessionUser>,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Initialize from durable storage: both fields default to `None`
    /// when absent. A `user` value that fails to decode is treated as
    /// absent rather than surfaced as an error.
    pub fn load(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY);
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { token, user, storage }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Backing storage, exposed so tests can check the mirrored state.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Set or clear the bearer token, mirroring the change to storage.
    /// No local validation of token format or expiry.
    pub fn set_token(&mut self, token: Option<String>) {
        match &token {
            Some(value) => self.storage.set(TOKEN_KEY, value),
            None => self.storage.remove(TOKEN_KEY),
        }
        self.token = token;
    }

    /// Set or clear the cached user profile, mirroring to storage.
    pub fn set_user(&mut self, user: Option<SessionUser>) {
        match &user {
            Some(value) => {
                if let Ok(raw) = serde_json::to_string(value) {
                    self.storage.set(USER_KEY, &raw);
                }
            }
            None => self.storage.remove(USER_KEY),
        }
        self.user = user;
    }

    /// Clear token and user. Unconditional and idempotent.
    pub fn logout(&mut self) {
        self.set_token(None);
        self.set_user(None);
        leptos::logging::log!("session: logged out");
    }

    /// Whether a token is currently held. Recomputed on every access.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the cached user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == ADMIN_ROLE)
    }

    /// `Authorization` header value for outbound requests, when logged in.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}
