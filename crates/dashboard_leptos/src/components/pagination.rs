//! Pager for the student list.

use eduboard_store::students::{next_page, previous_page};
use leptos::prelude::*;

/// Previous/next controls around a one-based page label. Pages are
/// zero-based everywhere except the label.
#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<u64>,
    #[prop(into)] total_page: Signal<u64>,
    #[prop(into)] on_page_change: Callback<u64>,
) -> impl IntoView {
    let go_previous = move |_| {
        if let Some(page) = previous_page(current_page.get()) {
            on_page_change.run(page);
        }
    };
    let go_next = move |_| {
        if let Some(page) = next_page(current_page.get(), total_page.get()) {
            on_page_change.run(page);
        }
    };

    view! {
        <nav class="pagination">
            <button
                on:click=go_previous
                disabled=move || previous_page(current_page.get()).is_none()
            >
                "Sebelumnya"
            </button>
            <span>
                {move || format!("Halaman {} dari {}", current_page.get() + 1, total_page.get())}
            </span>
            <button
                on:click=go_next
                disabled=move || next_page(current_page.get(), total_page.get()).is_none()
            >
                "Selanjutnya"
            </button>
        </nav>
    }
}
