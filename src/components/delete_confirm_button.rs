//! Two-step destructive action for table rows. The first click arms it,
//! the second commits.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into, default = "Really delete?".to_string())] prompt: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    // Disarm while busy.
    Effect::new(move |_| {
        if disabled.get() {
            armed.set(false);
        }
    });

    let arm_button = move || {
        view! {
            <button
                type="button"
                class=button_class.clone()
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    armed.set(true);
                }
            >
                {label.clone()}
            </button>
        }
    };

    view! {
        <Show when=move || armed.get() fallback=arm_button>
            <span class="row-confirm">
                <span class="muted">{prompt.clone()}</span>
                <button
                    type="button"
                    class="btn link danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="btn link"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
