//! Order Card Component
//!
//! One incoming order on the portal board: status selector and
//! expandable line items.

use leptos::prelude::*;

use crate::models::{format_price, format_timestamp, Order, OrderStatus};

#[component]
pub fn OrderCard(order: Order, #[prop(into)] on_status_change: Callback<(u32, OrderStatus)>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let id = order.id;
    let status = order.status;
    let customer = order
        .customer_details
        .as_ref()
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| format!("Customer #{}", order.user_id));
    let phone = order.customer_details.as_ref().and_then(|c| c.phone_number.clone());
    let address = order.delivery_address.clone().unwrap_or_default();
    let payment = order.payment.as_ref().map(|p| p.payment_method.label());
    let items = order.order_items.clone();

    let on_change = move |ev| {
        if let Some(next) = OrderStatus::parse(&event_target_value(&ev)) {
            if next != status {
                on_status_change.run((id, next));
            }
        }
    };

    view! {
        <div class="order-card">
            <div class="order-card-header">
                <div>
                    <h3>{format!("Order #{id}")}</h3>
                    <p class="muted">{format_timestamp(order.created_at.as_deref())}</p>
                </div>
                <span class=status.css_class()>{status.label()}</span>
            </div>

            <p class="strong">{customer}</p>
            {phone.map(|p| view! { <p class="muted">{p}</p> })}
            <p>{address}</p>
            <p class="price">{format_price(order.total_price)}</p>
            {payment.map(|p| view! { <p class="muted">{p}</p> })}

            <label class="field inline">
                <span class="field-label">"Status"</span>
                <select prop:value=status.as_str() on:change=on_change>
                    {OrderStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <button type="button" class="btn link" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Hide items" } else { "Show items" }}
            </button>

            <Show when=move || expanded.get()>
                <ul class="order-items">
                    {items
                        .iter()
                        .map(|line| {
                            let excluded = line.excluded_ingredients.clone().unwrap_or_default().join(", ");
                            view! {
                                <li>
                                    <span>
                                        {format!(
                                            "{} × {}",
                                            line.quantity,
                                            line.name.clone().unwrap_or_else(|| format!("Item #{}", line.menu_item_id)),
                                        )}
                                    </span>
                                    {(!excluded.is_empty()).then(|| view! { <span class="excluded">"Without: " {excluded}</span> })}
                                    {line.notes.clone().filter(|n| !n.is_empty()).map(|n| view! { <span class="notes">{n}</span> })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
