//! Blocking yes/no dialog.

use leptos::prelude::*;

/// Overlay asking for confirmation before an irreversible action.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h1>{title}</h1>
                <p>{subtitle}</p>
                <button class="button secondary" on:click=move |_| on_close.run(())>
                    "Batal"
                </button>
                <button class="button" on:click=move |_| on_confirm.run(())>
                    "Ya"
                </button>
            </div>
        </div>
    }
}
