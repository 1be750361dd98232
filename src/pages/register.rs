//! Registration page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http::Http;
use crate::net::types::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let http = expect_context::<Http>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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

        let info = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match api::register(http, &info).await {
                Ok(()) => navigate("/admin/login", Default::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <section class="register-page">
            <h1>"Create an account"</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>"Register"</button>
            </form>
            <Show when=move || error.get().is_some() fallback=|| ()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
