//! Previous / next pagination bar.

use leptos::prelude::*;

use crate::pagination::{has_next, has_prev};

#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pager">
                <button
                    type="button"
                    class="btn secondary"
                    disabled={move || !has_prev(page.get())}
                    on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="pager-status">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    type="button"
                    class="btn secondary"
                    disabled={move || !has_next(page.get(), total_pages.get())}
                    on:click=move |_| on_change.run(page.get_untracked() + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
