//! Toast stack, bottom corner. Click to dismiss.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            {move || {
                ctx.toasts
                    .with(|t| t.items().to_vec())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.css_class()
                                on:click=move |_| ctx.toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
