//! Portal Orders Page
//!
//! Order board. Polls the backend and feeds pending orders to the alert
//! queue; the alert dialog shows them one at a time.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::chime;
use crate::components::{NewOrderModal, OrderCard};
use crate::context::use_app_context;
use crate::models::{Order, OrderStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PortalOrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(None::<OrderStatus>);

    // Polls refresh silently; only the first load shows the spinner
    let fetch = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api::portal_orders(&api).await {
                Ok(list) => {
                    let pending: Vec<Order> = list
                        .iter()
                        .filter(|o| o.status == OrderStatus::Pending)
                        .cloned()
                        .collect();
                    let surfaced = store.order_queue().write().ingest(pending);
                    if let Some(order) = surfaced {
                        log::info!("[ALERTS] new order #{}", order.id);
                        chime::play_new_order();
                    }
                    set_orders.try_set(list);
                }
                Err(e) => log::warn!("[ALERTS] poll failed: {e}"),
            }
            set_loading.try_set(false);
        });
    };

    fetch();
    let every = u32::try_from(ctx.config().portal_poll.as_millis()).unwrap_or(15_000);
    // Dropped with the page, which stops the polling
    let _poll = StoredValue::new_local(Interval::new(every, fetch));

    let on_status_change = move |(order_id, status): (u32, OrderStatus)| {
        let api = ctx.api();
        spawn_local(async move {
            match api::update_order_status(&api, order_id, status).await {
                Ok(()) => {
                    ctx.toast_success(format!("Order #{order_id} is now {}.", status.label().to_lowercase()));
                    fetch();
                }
                Err(e) => ctx.toast_api_error(&e, "Could not update the order."),
            }
        });
    };

    let visible = move || {
        let wanted = filter.get();
        orders
            .get()
            .into_iter()
            .filter(|o| wanted.is_none_or(|s| o.status == s))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Orders"</h1>
                <select on:change=move |ev| set_filter.set(OrderStatus::parse(&event_target_value(&ev)))>
                    <option value="">"All statuses"</option>
                    {OrderStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading orders..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="muted centered">"No orders."</p> }
                >
                    <div class="order-board">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|order| view! { <OrderCard order=order on_status_change=on_status_change /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
            <NewOrderModal on_handled=move |_| fetch() />
        </div>
    }
}
