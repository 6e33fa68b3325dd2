use std::collections::HashMap;

use eduboard_domain::user::UserForm;
use eduboard_domain::validation::first_messages;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use validator::Validate;

use crate::components::{SelectField, TextField, use_toasts};
use crate::store::use_store;

use super::{role_options, set_page_title};

/// Form for registering a staff account.
#[component]
pub fn AddUser() -> impl IntoView {
    set_page_title("Pengguna | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let users = store.users;

    let form = RwSignal::new(UserForm::default());
    let (errors, set_errors) = signal(HashMap::<String, String>::new());

    let error_for =
        move |field: &'static str| Signal::derive(move || errors.with(|map| map.get(field).cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let candidate = form.get_untracked();
        match candidate.validate() {
            Err(violations) => set_errors.set(first_messages(&violations)),
            Ok(()) => {
                set_errors.set(HashMap::new());
                let store = store.clone();
                let toasts = toasts.clone();
                let navigate = navigate.clone();
                spawn_local(async move {
                    match store.create_user(candidate).await {
                        Ok(_) => {
                            toasts.success("Pengguna berhasil ditambahkan");
                            navigate("/users", Default::default());
                        }
                        Err(error) => toasts.error(error.message),
                    }
                });
            }
        }
    };

    view! {
        <h2>"Tambah Pengguna"</h2>
        <div class="card">
            <h4>"Data Pengguna"</h4>
            <form on:submit=on_submit>
                <TextField
                    label="Nama"
                    placeholder="Example"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.name = v))
                    error=error_for("name")
                />
                <TextField
                    label="Email"
                    placeholder="example@gmail.com"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.email = v))
                    error=error_for("email")
                />
                <TextField
                    label="Kata Sandi"
                    placeholder="*****"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.password = v))
                    error=error_for("password")
                />
                <TextField
                    label="Konfirmasi Kata Sandi"
                    placeholder="*****"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                    error=error_for("confirm_password")
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
}
