use leptos::prelude::*;

use crate::store::use_store;

use super::set_page_title;

/// Read-only card showing the signed-in account.
#[component]
pub fn Profile() -> impl IntoView {
    set_page_title("Profile | TailAdmin - Tailwind CSS Admin Dashboard Template");

    let store = use_store();
    let auth = store.auth;

    view! {
        <h2>"Profil"</h2>
        <div class="card">
            {move || {
                auth.with(|state| {
                    state
                        .user
                        .as_ref()
                        .map(|user| {
                            view! {
                                <dl>
                                    <dt>"Nama"</dt>
                                    <dd>{user.name.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                    <dt>"Role"</dt>
                                    <dd>{user.role.to_string()}</dd>
                                    <dt>"Status"</dt>
                                    <dd>{user.status.to_string()}</dd>
                                </dl>
                            }
                        })
                })
            }}
        </div>
    }
}
