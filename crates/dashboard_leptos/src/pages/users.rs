use eduboard_domain::user::AccountStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::store::use_store;

use super::set_page_title;

/// Staff account list with per-row activation switches.
///
/// Flipping a switch asks the server to toggle that account, then the
/// whole list is replaced by a fresh fetch so every row shows the
/// server's view, not an optimistic local patch.
#[component]
pub fn Users() -> impl IntoView {
    set_page_title("Pengguna | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let users = store.users;

    {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.load_users().await;
        });
    }

    view! {
        {move || {
            let state = users.get();
            if state.is_loading {
                view! { <p class="loading">"Loading..."</p> }.into_any()
            } else if state.is_error {
                view! { <p class="error">{state.message}</p> }.into_any()
            } else {
                let store = store.clone();
                view! {
                    <div class="card">
                        <div class="card-head">
                            <h4>"Daftar Pengguna"</h4>
                            <a class="button" href="/users/add">
                                "Tambah"
                            </a>
                        </div>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Nama"</th>
                                    <th>"Email"</th>
                                    <th>"Aksi"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .users
                                    .map(|rows| {
                                        rows.into_iter()
                                            .map(|user| {
                                                let detail = format!("/users/{}", user.id);
                                                let is_active = user.status
                                                    == AccountStatus::Active;
                                                let flipped = if is_active {
                                                    AccountStatus::Inactive
                                                } else {
                                                    AccountStatus::Active
                                                };
                                                let store = store.clone();
                                                let on_toggle = move |_| {
                                                    let store = store.clone();
                                                    spawn_local(async move {
                                                        let _ = store
                                                            .change_user_status(user.id, flipped)
                                                            .await;
                                                    });
                                                };
                                                view! {
                                                    <tr>
                                                        <td>{user.name}</td>
                                                        <td>{user.email}</td>
                                                        <td>
                                                            <A href=detail>"Lihat"</A>
                                                            <label class="switch">
                                                                <input
                                                                    type="checkbox"
                                                                    checked=is_active
                                                                    on:change=on_toggle
                                                                />
                                                            </label>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
