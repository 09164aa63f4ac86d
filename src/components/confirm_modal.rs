//! Confirm Modal Component
//!
//! Renders the app-wide confirmation request held in `AppContext`.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;

#[component]
pub fn ConfirmModal() -> impl IntoView {
    let ctx = use_app_context();

    let open = Signal::derive(move || ctx.confirm.with(Option::is_some));
    let message = move || {
        ctx.confirm
            .with(|c| c.as_ref().map(|c| c.message.clone()))
            .unwrap_or_default()
    };

    let confirm = move |_| {
        if let Some(request) = ctx.confirm.get_untracked() {
            ctx.close_confirm();
            request.on_confirm.run(());
        }
    };

    view! {
        <Modal
            open=open
            on_close=move |_| ctx.close_confirm()
            title="Are you sure?".to_string()
        >
            <p class="confirm-message">{message}</p>
            <div class="modal-actions">
                <button type="button" class="btn secondary" on:click=move |_| ctx.close_confirm()>
                    "Cancel"
                </button>
                <button type="button" class="btn danger" on:click=confirm>
                    "Confirm"
                </button>
            </div>
        </Modal>
    }
}
