//! Cart Panel Component
//!
//! Cart lines with quantity steppers, payment method and checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, CheckoutRequest};
use crate::context::use_app_context;
use crate::models::{format_price, PaymentMethod};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let go = Callback::new(move |path: String| navigate(&path, Default::default()));

    let (payment, set_payment) = signal(PaymentMethod::CashOnDelivery);
    let (submitting, set_submitting) = signal(false);

    let no_addresses = move || store.addresses().read().addresses.is_empty();

    let checkout = move |_| {
        let Some(address) = store.addresses().read_untracked().selected.clone() else {
            ctx.toast_error("Choose or add a delivery address first.");
            return;
        };
        let request = CheckoutRequest::from_cart(&store.cart().read_untracked(), &address, payment.get_untracked());
        let Some(request) = request else {
            return;
        };

        set_submitting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::create_order(&api, &request).await {
                Ok(order) => {
                    log::info!("[CART] order #{} placed", order.id);
                    store.cart().write().clear();
                    ctx.toast_success("Your order has been placed!");
                    go.run(format!("/orders/{}", order.id));
                }
                Err(e) => ctx.toast_api_error(&e, "Could not place the order."),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <aside class="panel cart-panel">
            <h3>"Your cart"</h3>
            <Show
                when=move || !store.cart().read().is_empty()
                fallback=|| view! { <p class="muted centered">"Your cart is empty."</p> }
            >
                <div class="cart-lines">
                    {move || {
                        store
                            .cart()
                            .read()
                            .lines
                            .clone()
                            .into_iter()
                            .map(|line| {
                                let id = line.line_id;
                                let quantity = i64::from(line.quantity);
                                let excluded = line.customization.excluded_ingredients.join(", ");
                                let notes = line.customization.notes.clone();
                                view! {
                                    <div class="cart-line">
                                        <div>
                                            <p class="strong">{line.item.name.clone()}</p>
                                            <p class="muted">{format_price(line.subtotal())}</p>
                                        </div>
                                        <div class="stepper">
                                            <button
                                                type="button"
                                                on:click=move |_| store.cart().write().update_quantity(id, quantity - 1)
                                            >
                                                "−"
                                            </button>
                                            <span>{line.quantity}</span>
                                            <button
                                                type="button"
                                                on:click=move |_| store.cart().write().update_quantity(id, quantity + 1)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                        {(!excluded.is_empty())
                                            .then(|| view! { <p class="excluded">"Without: " {excluded}</p> })}
                                        {(!notes.is_empty()).then(|| view! { <p class="notes">"Notes: " {notes}</p> })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <hr />
                <h4>"Payment method"</h4>
                <div class="radio-row">
                    {PaymentMethod::CHOICES
                        .iter()
                        .map(|&method| {
                            view! {
                                <label>
                                    <input
                                        type="radio"
                                        name="payment-method"
                                        value=method.as_str()
                                        prop:checked=move || payment.get() == method
                                        on:change=move |_| set_payment.set(method)
                                    />
                                    {method.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="cart-total">
                    <span>"Total"</span>
                    <span>{move || format_price(store.cart().read().total_price())}</span>
                </div>
                <button
                    type="button"
                    class="btn primary"
                    disabled=move || submitting.get() || no_addresses()
                    on:click=checkout
                >
                    {move || {
                        if submitting.get() {
                            "Placing order...".to_string()
                        } else {
                            format!("Checkout ({})", store.cart().read().total_items())
                        }
                    }}
                </button>
            </Show>
        </aside>
    }
}
