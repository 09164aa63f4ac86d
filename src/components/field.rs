//! Labelled Form Fields
//!
//! Text inputs bound to an `RwSignal<String>`, with an inline error line fed
//! from `FieldErrors`.

use leptos::prelude::*;

use crate::validation::FieldErrors;

/// Labelled `<input>`; `kind` is the HTML input type (text when empty).
#[component]
pub fn Field(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] kind: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let kind = if kind.is_empty() { "text" } else { kind };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type=kind
                placeholder=placeholder
                disabled=disabled
                class=move || if error.get().is_some() { "input invalid" } else { "input" }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

/// Labelled `<textarea>`.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea
                rows="3"
                placeholder=placeholder
                class=move || if error.get().is_some() { "input invalid" } else { "input" }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

/// Reactive accessor for one field's message.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}
