//! Account settings: password change.

use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::net::api;
use crate::net::http::Http;
use crate::net::types::PasswordChangeRequest;

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<(), String>>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        outcome.set(None);

        let payload = PasswordChangeRequest {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            match api::change_password(http, &payload).await {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    outcome.set(Some(Ok(())));
                }
                Err(e) => outcome.set(Some(Err(e.to_string()))),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="admin-page">
            <AdminNav/>
            <section class="admin-page__content">
                <h1>"Settings"</h1>

                <form class="settings-form" on:submit=on_submit>
                    <input
                        type="password"
                        placeholder="Current password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || pending.get()>"Change password"</button>
                </form>

                {move || {
                    outcome
                        .get()
                        .map(|result| match result {
                            Ok(()) => {
                                view! { <p class="success">"Password changed."</p> }.into_any()
                            }
                            Err(message) => view! { <p class="error">{message}</p> }.into_any(),
                        })
                }}
            </section>
        </div>
    }
}
