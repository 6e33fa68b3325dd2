//! Headline figures for the dashboard landing page.

use leptos::prelude::*;

/// One aggregate count: the figure on top, its caption underneath.
#[component]
pub fn StatCard(
    /// Caption under the figure, e.g. "Total Siswa".
    #[prop(into)]
    title: String,
    /// The count, re-rendered as fetches land.
    #[prop(into)]
    total: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h4 class="stat-total">{move || total.get()}</h4>
            <span class="stat-title">{title}</span>
        </div>
    }
}
