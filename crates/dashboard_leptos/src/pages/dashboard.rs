use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatCard;
use crate::store::use_store;

use super::set_page_title;

/// Landing page: head-count cards plus the gender breakdown.
///
/// Both fetches fire on mount and fill disjoint parts of the counts, so
/// neither waits for the other.
#[component]
pub fn DashboardHome() -> impl IntoView {
    set_page_title("Dashboard | Dinas Pendidikan Daerah Provinsi Sulawesi Utara");

    let store = use_store();
    let dashboard = store.dashboard;

    {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.load_student_count().await;
        });
    }
    spawn_local(async move {
        let _ = store.load_gender_tally().await;
    });

    let counts = Signal::derive(move || dashboard.with(|state| state.counts));

    view! {
        <div class="stat-grid">
            <StatCard title="Total Siswa" total=Signal::derive(move || counts.get().students)/>
            <StatCard title="Laki-laki" total=Signal::derive(move || counts.get().males)/>
            <StatCard title="Perempuan" total=Signal::derive(move || counts.get().females)/>
        </div>
        {move || {
            dashboard
                .with(|state| {
                    state
                        .is_error
                        .then(|| view! { <p class="error">{state.message.clone()}</p> })
                })
        }}
        <div class="card">
            <h4>"Jenis Kelamin"</h4>
            <ul class="breakdown">
                {move || {
                    let counts = counts.get();
                    let total = counts.males + counts.females;
                    [("Laki-laki", counts.males), ("Perempuan", counts.females)]
                        .into_iter()
                        .map(|(label, value)| {
                            let percent = if total == 0 {
                                0.0
                            } else {
                                value as f64 / total as f64 * 100.0
                            };
                            view! {
                                <li>
                                    <span>{label}</span>
                                    <span>{format!("{value} ({percent:.2}%)")}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
