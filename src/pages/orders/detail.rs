//! Order Detail Page
//!
//! Line items, delivery, payment, and a rating form once the order is
//! delivered and not yet rated.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::{field_error, TextArea};
use crate::context::use_app_context;
use crate::models::{format_price, format_timestamp, Order};
use crate::validation::{FieldErrors, RatingForm, Validate};

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();

    let order_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok())));
    let order = RwSignal::new(None::<Order>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = order_id.get() else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::get_order(&api, id).await {
                Ok(found) => {
                    order.try_set(Some(found));
                }
                Err(e) => ctx.toast_api_error(&e, "Could not load the order."),
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <div class="page narrow">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading order..."</p> }
            >
                {move || match order.get() {
                    None => view! { <p class="muted centered">"Order not found."</p> }.into_any(),
                    Some(o) => view! { <OrderSummary order=o /> <RatingSection order=order /> }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn OrderSummary(order: Order) -> impl IntoView {
    let payment = order.payment.clone();

    view! {
        <section class="panel">
            <div class="order-card-header">
                <h1>{format!("Order #{}", order.id)}</h1>
                <span class=order.status.css_class()>{order.status.label()}</span>
            </div>
            <p class="strong">{order.restaurant_name.clone().unwrap_or_default()}</p>
            <p class="muted">{format_timestamp(order.created_at.as_deref())}</p>

            <ul class="order-items">
                {order
                    .order_items
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
                                <span class="muted">{format_price(line.price_at_order)}</span>
                                {(!excluded.is_empty()).then(|| view! { <span class="excluded">"Without: " {excluded}</span> })}
                                {line.notes.clone().filter(|n| !n.is_empty()).map(|n| view! { <span class="notes">{n}</span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="cart-total">
                <span>"Total"</span>
                <span>{format_price(order.total_price)}</span>
            </div>
            <p>"Deliver to: " {order.delivery_address.clone().unwrap_or_default()}</p>
            {payment
                .map(|p| {
                    view! {
                        <p>
                            "Payment: " {p.payment_method.label()} " · " {p.status_label().to_string()}
                        </p>
                    }
                })}
        </section>
    }
}

#[component]
fn RatingSection(order: RwSignal<Option<Order>>) -> impl IntoView {
    let ctx = use_app_context();

    let stars = RwSignal::new(0_u8);
    let comment = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let can_rate = move || order.with(|o| o.as_ref().is_some_and(Order::can_be_rated));
    let existing = move || order.with(|o| o.as_ref().and_then(|o| o.rating.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(id) = order.with_untracked(|o| o.as_ref().map(|o| o.id)) else {
            return;
        };
        let form = RatingForm {
            restaurant_rating: stars.get_untracked(),
            comment: Some(comment.get_untracked().trim().to_string()).filter(|c| !c.is_empty()),
        };
        let problems = form.validate();
        let invalid = !problems.is_empty();
        errors.set(problems);
        if invalid {
            return;
        }

        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::rate_order(&api, id, &form).await {
                Ok(rating) => {
                    ctx.toast_success("Thanks for your rating!");
                    order.try_update(|o| {
                        if let Some(o) = o {
                            o.rating = Some(rating);
                        }
                    });
                }
                Err(e) => ctx.toast_api_error(&e, "Could not save the rating."),
            }
            set_saving.try_set(false);
        });
    };

    view! {
        {move || {
            existing()
                .map(|rating| {
                    view! {
                        <section class="panel">
                            <h2>"Your rating"</h2>
                            <p class="stars">{"★".repeat(usize::from(rating.restaurant_rating))}</p>
                            {rating.comment.map(|c| view! { <p class="muted">{c}</p> })}
                        </section>
                    }
                })
        }}
        <Show when=can_rate>
            <form class="panel" on:submit=on_submit>
                <h2>"Rate this order"</h2>
                <div class="stars-input">
                    {(1..=5_u8)
                        .map(|n| {
                            view! {
                                <button
                                    type="button"
                                    class={move || if stars.get() >= n { "star on" } else { "star" }}
                                    on:click=move |_| stars.set(n)
                                >
                                    "★"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    field_error(errors, "restaurant_rating")
                        .get()
                        .map(|msg| view! { <span class="field-error">{msg}</span> })
                }}
                <TextArea label="Comment (optional)" value=comment />
                <button type="submit" class="btn primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Sending..." } else { "Submit rating" }}
                </button>
            </form>
        </Show>
    }
}
