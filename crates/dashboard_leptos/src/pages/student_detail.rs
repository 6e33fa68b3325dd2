use std::collections::HashMap;

use eduboard_domain::id::StudentId;
use eduboard_domain::student::StudentForm;
use eduboard_domain::validation::first_messages;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use validator::Validate;

use crate::components::{ConfirmDialog, StudentFields, use_toasts};
use crate::store::use_store;

use super::set_page_title;

/// Detail page: fetches one record, seeds the edit form from it, and
/// carries the update and delete flows.
#[component]
pub fn StudentDetail() -> impl IntoView {
    set_page_title("Siswa | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let students = store.students;
    let params = use_params_map();

    let id = Signal::derive(move || {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<StudentId>().ok()))
    });

    {
        let store = store.clone();
        Effect::new(move |_| {
            if let Some(id) = id.get() {
                let store = store.clone();
                spawn_local(async move {
                    let _ = store.load_student(id).await;
                });
            }
        });
    }

    let form = RwSignal::new(StudentForm::default());
    let (errors, set_errors) = signal(HashMap::<String, String>::new());
    let (confirming, set_confirming) = signal(false);

    // Memoized so the form is reseeded only when the record itself
    // changes, not when a request merely flips the loading flag.
    let record = Memo::new(move |_| students.with(|state| state.student.clone()));
    Effect::new(move |_| {
        if let Some(student) = record.get() {
            form.set(StudentForm::from_student(&student));
        }
    });

    let on_submit = {
        let store = store.clone();
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
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
                        match store.update_student(id, candidate).await {
                            Ok(_) => {
                                toasts.success("Data siswa berhasil diperbarui");
                                navigate("/students", Default::default());
                            }
                            Err(_) => toasts.error("Terjadi kesalahan"),
                        }
                    });
                }
            }
        }
    };

    let on_delete = Callback::new(move |()| {
        let Some(id) = id.get_untracked() else {
            return;
        };
        set_confirming.set(false);
        let store = store.clone();
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match store.delete_student(id).await {
                Ok(_) => {
                    toasts.success("Data siswa berhasil dihapus");
                    navigate("/students", Default::default());
                }
                Err(_) => toasts.error("Terjadi kesalahan"),
            }
        });
    });

    let loaded = Memo::new(move |_| students.with(|state| state.student.is_some()));

    view! {
        <h2>"Detail Siswa"</h2>
        {move || {
            loaded
                .get()
                .then(|| {
                    view! {
                        <div class="card">
                            <div class="card-head">
                                <h4>"Data Siswa"</h4>
                                <button
                                    class="button secondary"
                                    on:click=move |_| set_confirming.set(true)
                                >
                                    "Hapus"
                                </button>
                            </div>
                            <form on:submit=on_submit.clone()>
                                <StudentFields form=form errors=errors/>
                                <button
                                    type="submit"
                                    class="button"
                                    disabled=move || students.with(|state| state.is_loading)
                                >
                                    "Simpan"
                                </button>
                            </form>
                        </div>
                    }
                })
        }}
        {move || {
            confirming
                .get()
                .then(|| {
                    view! {
                        <ConfirmDialog
                            title="Hapus Siswa"
                            subtitle="Data yang dihapus tidak dapat dikembalikan."
                            on_confirm=on_delete
                            on_close=Callback::new(move |()| set_confirming.set(false))
                        />
                    }
                })
        }}
    }
}
