//! New Order Alert
//!
//! Blocking dialog for the oldest pending order in the queue. Staff accept
//! (moves to preparing) or reject (cancels) it; the next queued order shows
//! after a short settle delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::chime;
use crate::context::use_app_context;
use crate::models::{format_price, OrderStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewOrderModal(
    /// Runs after an order was accepted or rejected.
    #[prop(into)]
    on_handled: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (busy, set_busy) = signal(false);
    let current = Memo::new(move |_| store.order_queue().read().current().cloned());
    let open = move || store.order_queue().read().is_modal_open() && current.with(Option::is_some);
    let waiting = move || store.order_queue().read().waiting();

    let respond = move |status: OrderStatus| {
        let Some(order) = current.get_untracked() else {
            return;
        };
        set_busy.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::update_order_status(&api, order.id, status).await {
                Ok(()) => {
                    log::info!("[PORTAL] order #{} -> {}", order.id, status.as_str());
                    store.order_queue().write().resolve();
                    if status == OrderStatus::Cancelled {
                        ctx.toast_info(format!("Order #{} rejected.", order.id));
                    } else {
                        ctx.toast_success(format!("Order #{} accepted.", order.id));
                    }

                    let settle = u32::try_from(ctx.config().alert_settle.as_millis()).unwrap_or(500);
                    Timeout::new(settle, move || {
                        let surfaced = store.order_queue().try_update(|q| q.settle()).flatten();
                        if let Some(order) = surfaced {
                            log::info!("[ALERTS] order #{} surfaced", order.id);
                            chime::play_new_order();
                        }
                    })
                    .forget();
                    on_handled.run(());
                }
                // The alert stays up so staff can retry
                Err(e) => ctx.toast_api_error(&e, "Could not update the order."),
            }
            set_busy.try_set(false);
        });
    };

    let reject = move |_| {
        let Some(order) = current.get_untracked() else {
            return;
        };
        ctx.confirm(format!("Reject order #{}?", order.id), move || respond(OrderStatus::Cancelled));
    };

    view! {
        <Show when=open>
            <div class="modal-backdrop">
                <div class="modal new-order">
                    {move || {
                        current
                            .get()
                            .map(|order| {
                                let customer = order
                                    .customer_details
                                    .as_ref()
                                    .and_then(|c| c.name.clone())
                                    .unwrap_or_else(|| format!("Customer #{}", order.user_id));
                                view! {
                                    <h2>"New order!"</h2>
                                    <p class="strong">{format!("Order #{} from {customer}", order.id)}</p>
                                    <p>{order.delivery_address.clone().unwrap_or_default()}</p>
                                    <ul class="order-items">
                                        {order
                                            .order_items
                                            .iter()
                                            .map(|line| {
                                                view! {
                                                    <li>
                                                        {format!(
                                                            "{} × {}",
                                                            line.quantity,
                                                            line.name.clone().unwrap_or_else(|| format!("Item #{}", line.menu_item_id)),
                                                        )}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <p class="price">{format_price(order.total_price)}</p>
                                }
                            })
                    }}
                    <Show when=move || { waiting() > 0 }>
                        <p class="muted">{move || format!("{} more waiting", waiting())}</p>
                    </Show>
                    <div class="modal-actions">
                        <button type="button" class="btn danger" disabled=move || busy.get() on:click=reject>
                            "Reject"
                        </button>
                        <button
                            type="button"
                            class="btn primary"
                            disabled=move || busy.get()
                            on:click=move |_| respond(OrderStatus::Preparing)
                        >
                            "Accept"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
