use eduboard_domain::student::StudentQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::Pagination;
use crate::store::use_store;

use super::set_page_title;

/// Paged, searchable student list.
///
/// The page and search term live here, not in the slice; every change
/// re-issues the list fetch. Typing a new term snaps back to page zero so
/// the narrowed result set starts from its first page.
#[component]
pub fn Students() -> impl IntoView {
    set_page_title("Siswa | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let students = store.students;

    // Resume at whatever page the last visit fetched.
    let (current_page, set_current_page) = signal(students.with_untracked(|state| state.page));
    let (search_term, set_search_term) = signal(String::new());

    Effect::new(move |_| {
        let query = StudentQuery {
            page: current_page.get(),
            limit: 10,
            search: search_term.get(),
        };
        let store = store.clone();
        spawn_local(async move {
            let _ = store.load_students(query).await;
        });
    });

    let on_search = move |ev| {
        set_search_term.set(event_target_value(&ev));
        set_current_page.set(0);
    };

    view! {
        <div class="card">
            <div class="card-head">
                <h4>"Daftar Siswa"</h4>
                <a class="button" href="/students/add">
                    "Tambah"
                </a>
            </div>
            <div class="field">
                <label>"Cari"</label>
                <input
                    type="text"
                    placeholder="Cari Siswa"
                    prop:value=move || search_term.get()
                    on:input=on_search
                />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Nama"</th>
                        <th>"Email"</th>
                        <th>"Alamat"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        students
                            .with(|state| {
                                state
                                    .students
                                    .as_ref()
                                    .map(|rows| {
                                        rows.iter()
                                            .map(|student| {
                                                let dashed = |text: &str| {
                                                    if text.is_empty() {
                                                        "-".to_string()
                                                    } else {
                                                        text.to_string()
                                                    }
                                                };
                                                let detail = format!("/students/{}", student.id);
                                                view! {
                                                    <tr>
                                                        <td>{student.name.clone()}</td>
                                                        <td>{dashed(&student.email)}</td>
                                                        <td>{dashed(&student.address)}</td>
                                                        <td>
                                                            <A href=detail>"Lihat"</A>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            })
                    }}
                </tbody>
            </table>
            <Pagination
                current_page=current_page
                total_page=Signal::derive(move || students.with(|state| state.total_page))
                on_page_change=Callback::new(move |page| set_current_page.set(page))
            />
        </div>
    }
}
