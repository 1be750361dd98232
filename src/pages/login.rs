//! Login page.
//!
//! On success the token and profile go into the session store, then
//! navigation returns to the `redirect` query parameter the guard attached,
//! or to the landing route when the user came here directly.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::http::Http;
use crate::net::types::LoginRequest;
use crate::routing::table::LANDING_PATH;
use crate::state::session::{SessionStore, SessionUser};
use crate::state::storage::BrowserStorage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let credentials = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        let target = query
            .get_untracked()
            .get("redirect")
            .unwrap_or_else(|| LANDING_PATH.to_owned());

        leptos::task::spawn_local(async move {
            match api::login(http, &credentials).await {
                Ok(response) => {
                    session.update(|s| {
                        s.set_token(Some(response.access_token.clone()));
                        s.set_user(Some(SessionUser {
                            username: response.username.clone(),
                            role: response.role.clone(),
                        }));
                    });
                    navigate(&target, Default::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <section class="login-page">
            <h1>"Sign in"</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p class="login-page__register">
                <a href="/admin/register">"Need an account? Register"</a>
            </p>
        </section>
    }
}
