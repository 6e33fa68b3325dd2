use std::collections::HashMap;

use eduboard_domain::user::Credentials;
use eduboard_domain::validation::first_messages;
use eduboard_store::auth::AuthState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use validator::Validate;

use crate::components::use_toasts;
use crate::store::use_store;

/// Sign-in screen, the only route outside the authenticated shell.
///
/// The terminal flags drive the effect below: a rejection toasts its
/// message, a success (or an already-present session) forwards to the
/// dashboard. Either way the slice is reset afterwards so the leftover
/// flags cannot fire the effect again on the next visit.
#[component]
pub fn SignIn() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let auth = store.auth;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(HashMap::<String, String>::new());
    let (hide_password, set_hide_password) = signal(true);

    {
        let store = store.clone();
        Effect::new(move |_| {
            let state = auth.get();
            if state.is_error {
                toasts.error(state.message.clone());
            }
            if state.is_success || state.user.is_some() {
                navigate("/dashboard", Default::default());
            }
            // Guarded reset: dispatching from an effect that watches the
            // same slice would otherwise loop forever.
            if state != AuthState::default() {
                store.reset_auth();
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match credentials.validate() {
            Err(violations) => set_errors.set(first_messages(&violations)),
            Ok(()) => {
                set_errors.set(HashMap::new());
                let store = store.clone();
                spawn_local(async move {
                    let _ = store.login(credentials).await;
                });
            }
        }
    };

    let error_for = move |field: &'static str| {
        errors
            .with(|map| map.get(field).cloned())
            .map(|message| view! { <p class="field-error">{message}</p> })
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h2>"Masuk ke Aplikasi"</h2>
                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Email"</label>
                        <input
                            type="text"
                            placeholder="example@gmail.com"
                            prop:value=move || email.get()
                            class:invalid=move || errors.with(|map| map.contains_key("email"))
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || error_for("email")}
                    </div>
                    <div class="field">
                        <label>"Kata Sandi"</label>
                        <input
                            type=move || if hide_password.get() { "password" } else { "text" }
                            placeholder="********"
                            prop:value=move || password.get()
                            class:invalid=move || errors.with(|map| map.contains_key("password"))
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="switch"
                            on:click=move |_| set_hide_password.update(|hide| *hide = !*hide)
                        >
                            {move || if hide_password.get() { "Tampilkan" } else { "Sembunyikan" }}
                        </button>
                        {move || error_for("password")}
                    </div>
                    <button
                        type="submit"
                        class="button"
                        disabled=move || {
                            auth.with(|state| state.is_loading)
                                || email.with(String::is_empty)
                                || password.with(String::is_empty)
                        }
                    >
                        {move || {
                            if auth.with(|state| state.is_loading) {
                                "Memuat\u{2026}"
                            } else {
                                "Masuk"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
