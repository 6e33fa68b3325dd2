use std::collections::HashMap;

use eduboard_domain::id::UserId;
use eduboard_domain::user::UserUpdateForm;
use eduboard_domain::validation::first_messages;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use validator::Validate;

use crate::components::{SelectField, TextField, use_toasts};
use crate::store::use_store;

use super::{role_options, set_page_title};

/// Detail page for one staff account: name, email, and role are
/// editable; credentials are not, they only exist on creation.
#[component]
pub fn UserDetail() -> impl IntoView {
    set_page_title("Pengguna | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let users = store.users;
    let params = use_params_map();

    let id = Signal::derive(move || {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<UserId>().ok()))
    });

    {
        let store = store.clone();
        Effect::new(move |_| {
            if let Some(id) = id.get() {
                let store = store.clone();
                spawn_local(async move {
                    let _ = store.load_user(id).await;
                });
            }
        });
    }

    let form = RwSignal::new(UserUpdateForm::default());
    let (errors, set_errors) = signal(HashMap::<String, String>::new());

    let record = Memo::new(move |_| users.with(|state| state.user.clone()));
    Effect::new(move |_| {
        if let Some(user) = record.get() {
            form.set(UserUpdateForm::from_user(&user));
        }
    });

    let error_for =
        move |field: &'static str| Signal::derive(move || errors.with(|map| map.get(field).cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id.get_untracked() else {
            return;
        };
        let candidate = form.get_untracked();
        match candidate.validate() {
            Err(violations) => set_errors.set(first_messages(&violations)),
            Ok(()) => {
                set_errors.set(HashMap::new());
                let store = store.clone();
                let toasts = toasts.clone();
                let navigate = navigate.clone();
                spawn_local(async move {
                    match store.update_user(id, candidate).await {
                        Ok(_) => {
                            toasts.success("Pengguna berhasil diperbarui");
                            navigate("/users", Default::default());
                        }
                        Err(_) => toasts.error("Terjadi kesalahan"),
                    }
                });
            }
        }
    };

    let loaded = Memo::new(move |_| users.with(|state| state.user.is_some()));

    view! {
        <h2>"Detail Pengguna"</h2>
        {move || {
            loaded
                .get()
                .then(|| {
                    view! {
                        <div class="card">
                            <h4>"Data Pengguna"</h4>
                            <form on:submit=on_submit.clone()>
                                <TextField
                                    label="Nama"
                                    placeholder="Example"
                                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                                    on_change=Callback::new(move |v| {
                                        form.update(|f| f.name = v);
                                    })
                                    error=error_for("name")
                                />
                                <TextField
                                    label="Email"
                                    placeholder="example@gmail.com"
                                    input_type="email"
                                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                                    on_change=Callback::new(move |v| {
                                        form.update(|f| f.email = v);
                                    })
                                    error=error_for("email")
                                />
                                <SelectField
                                    label="Role"
                                    options=role_options()
                                    value=Signal::derive(move || form.with(|f| f.role.to_string()))
                                    on_change=Callback::new(move |v: String| {
                                        form.update(|f| f.role = v.parse().unwrap_or_default());
                                    })
                                    error=error_for("role")
                                />
                                <button
                                    type="submit"
                                    class="button"
                                    disabled=move || users.with(|state| state.is_loading)
                                >
                                    "Simpan"
                                </button>
                            </form>
                        </div>
                    }
                })
        }}
    }
}
