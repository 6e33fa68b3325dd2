//! Chrome around every authenticated page: sidebar, header, footer, and
//! the session guard.

use eduboard_domain::user::{AccountStatus, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::use_toasts;
use crate::store::use_store;

/// Authenticated page wrapper.
///
/// Re-checks the session on every mount, then bounces the visitor back to
/// the sign-in screen when the check fails or the account has been
/// switched off while they were signed in.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    window().scroll_to_with_x_and_y(0.0, 0.0);
    {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.current_user().await;
        });
    }

    let navigate = use_navigate();
    Effect::new(move |_| {
        let auth = store.auth.get();
        if auth.is_error {
            navigate("/", Default::default());
        } else if auth
            .user
            .as_ref()
            .is_some_and(|user| user.status == AccountStatus::Inactive)
        {
            toasts.error("Akun anda sedang dinonaktifkan");
            navigate("/", Default::default());
        }
    });

    view! {
        <div class="shell">
            <Sidebar/>
            <div class="content">
                <Header/>
                <main>{children()}</main>
                <Footer/>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let store = use_store();
    let is_superadmin = move || {
        store
            .auth
            .with(|auth| auth.user.as_ref().is_some_and(|user| user.role == Role::Superadmin))
    };

    view! {
        <aside class="sidebar">
            <a class="brand" href="/">
                "Dinas Pendidikan Daerah Provinsi Sulawesi Utara"
            </a>
            <h3>"MENU"</h3>
            <ul>
                <li><a href="/dashboard">"Dashboard"</a></li>
                {move || {
                    is_superadmin().then(|| view! { <li><a href="/users">"Pengguna"</a></li> })
                }}
                <li><a href="/students">"Siswa"</a></li>
            </ul>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();

    let on_logout = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let _ = store.logout().await;
                store.reset_auth();
                navigate("/", Default::default());
            });
        }
    };

    view! {
        <header class="header">
            <a class="who" href="/profile">
                {move || {
                    store
                        .auth
                        .with(|auth| {
                            auth.user
                                .as_ref()
                                .map(|user| {
                                    view! {
                                        <p>{user.name.clone()}</p>
                                        <p class="role">{user.role.to_string()}</p>
                                    }
                                })
                        })
                }}
            </a>
            <button class="button secondary" on:click=on_logout>
                "Keluar"
            </button>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            {format!("Copyright 2022 - {year} Dinas Pendidikan Daerah Provinsi Sulawesi Utara")}
        </footer>
    }
}
