use std::collections::HashMap;

use eduboard_domain::student::StudentForm;
use eduboard_domain::validation::first_messages;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use validator::Validate;

use crate::components::{StudentFields, use_toasts};
use crate::store::use_store;

use super::set_page_title;

/// Registration form for a new student.
///
/// Nothing is sent while any field fails its rule; the violations render
/// inline instead. A confirmed save clears the form and returns to the
/// list.
#[component]
pub fn AddStudent() -> impl IntoView {
    set_page_title("Siswa | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = RwSignal::new(StudentForm::default());
    let (errors, set_errors) = signal(HashMap::<String, String>::new());
    let students = store.students;

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
                    match store.create_student(candidate).await {
                        Ok(_) => {
                            toasts.success("Siswa berhasil ditambahkan");
                            form.set(StudentForm::default());
                            navigate("/students", Default::default());
                        }
                        Err(_) => toasts.error("Siswa gagal ditambahkan"),
                    }
                });
            }
        }
    };

    view! {
        <h2>"Tambah Siswa"</h2>
        <div class="card">
            <h4>"Data Siswa"</h4>
            <form on:submit=on_submit>
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
}
