//! Labelled form controls with inline validation messages.

use leptos::prelude::*;

/// A labelled text input bound to a string signal.
///
/// The error slot renders the first validation message for the field, or
/// nothing once the field passes.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(default = "text".into(), into)] input_type: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label} <span class="required">"*"</span></label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                class:invalid=move || error.get().is_some()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}

/// A labelled multi-line input bound to a string signal.
#[component]
pub fn TextareaField(
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label} <span class="required">"*"</span></label>
            <textarea
                rows=4
                placeholder=placeholder
                prop:value=move || value.get()
                class:invalid=move || error.get().is_some()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}

/// A labelled select bound to a string signal.
///
/// `options` pairs the wire value with its display text.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    options: Vec<(String, String)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label>{label} <span class="required">"*"</span></label>
            <select
                prop:value=move || value.get()
                class:invalid=move || error.get().is_some()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(wire, display)| {
                        let current = wire.clone();
                        view! {
                            <option value=wire selected=move || value.get() == current>
                                {display}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}
