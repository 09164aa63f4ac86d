use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::context::use_app_context;
use crate::models::{format_price, format_timestamp, Order};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    let api = ctx.api();
    spawn_local(async move {
        match api::list_orders(&api).await {
            Ok(mut list) => {
                // Newest first
                list.sort_by_key(|o| std::cmp::Reverse(o.created_at_ts()));
                set_orders.try_set(list);
            }
            Err(e) => ctx.toast_api_error(&e, "Could not load your orders."),
        }
        set_loading.try_set(false);
    });

    view! {
        <div class="page">
            <h1>"My orders"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading orders..."</p> }
            >
                <Show
                    when=move || !orders.with(Vec::is_empty)
                    fallback=|| {
                        view! {
                            <div class="centered">
                                <p class="muted">"You have not ordered anything yet."</p>
                                <A href="/" attr:class="btn primary">"Browse restaurants"</A>
                            </div>
                        }
                    }
                >
                    <ul class="order-list">
                        {move || {
                            orders
                                .get()
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <li>
                                            <A href=format!("/orders/{}", order.id) attr:class="order-row">
                                                <span class="strong">{format!("Order #{}", order.id)}</span>
                                                <span>{order.restaurant_name.clone().unwrap_or_default()}</span>
                                                <span class="muted">{format_timestamp(order.created_at.as_deref())}</span>
                                                <span>{format_price(order.total_price)}</span>
                                                <span class=order.status.css_class()>{order.status.label()}</span>
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
