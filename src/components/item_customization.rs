//! Item Customization Component
//!
//! Dialog for removing ingredients and adding a note before an item goes
//! into the cart.

use leptos::prelude::*;

use crate::cart::Customization;
use crate::components::{ImageSlider, Modal};
use crate::context::use_app_context;
use crate::models::{format_price, MenuItem};
use crate::store::{use_app_store, AppStateStoreFields};

/// Open while `item` holds a menu item.
#[component]
pub fn ItemCustomization(item: RwSignal<Option<MenuItem>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let excluded = RwSignal::new(Vec::<String>::new());
    let notes = RwSignal::new(String::new());

    // Fresh choices for every item
    Effect::new(move |_| {
        item.track();
        excluded.set(Vec::new());
        notes.set(String::new());
    });

    let title = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.name.clone()).unwrap_or_default()));
    let images = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.images.clone()).unwrap_or_default()));
    let ingredients = move || {
        item.with(|i| i.as_ref().map(|i| i.removable_ingredients.clone()).unwrap_or_default())
    };

    let add_to_cart = move |_| {
        let Some(menu_item) = item.get_untracked() else {
            return;
        };
        let name = menu_item.name.clone();
        let restaurant_id = menu_item.restaurant_id;
        let customization = Customization {
            excluded_ingredients: excluded.get_untracked(),
            notes: notes.get_untracked().trim().to_string(),
        };

        let added = store.cart().write().add_item(menu_item, restaurant_id, customization);
        match added {
            Ok(_) => {
                ctx.toast_success(format!("{name} added to your cart."));
                item.set(None);
            }
            Err(e) => {
                log::info!("[CART] rejected: {e}");
                ctx.toast_error("Your cart holds items from another restaurant. Empty it before ordering here.");
            }
        }
    };

    view! {
        <Modal open=Signal::derive(move || item.with(Option::is_some)) on_close=move |_| item.set(None) title=title>
            <div class="customization">
                <ImageSlider images=images />
                <p class="price">
                    {move || item.with(|i| i.as_ref().map(|i| format_price(i.price)).unwrap_or_default())}
                </p>
                <p class="muted">
                    {move || item.with(|i| i.as_ref().and_then(|i| i.description.clone()).unwrap_or_default())}
                </p>

                <Show when=move || !ingredients().is_empty()>
                    <h4>"Remove ingredients"</h4>
                    <div class="chips">
                        {move || {
                            ingredients()
                                .into_iter()
                                .map(|ingredient| {
                                    let key = ingredient.clone();
                                    let is_off = move || excluded.with(|e| e.contains(&key));
                                    let toggle = ingredient.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class=move || if is_off() { "chip off" } else { "chip" }
                                            on:click=move |_| {
                                                excluded.update(|e| {
                                                    if let Some(pos) = e.iter().position(|x| *x == toggle) {
                                                        e.remove(pos);
                                                    } else {
                                                        e.push(toggle.clone());
                                                    }
                                                })
                                            }
                                        >
                                            {ingredient}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <label class="field">
                    <span class="field-label">"Notes"</span>
                    <textarea
                        rows="3"
                        placeholder="e.g. extra mayo, no bread"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button type="button" class="btn primary" on:click=add_to_cart>
                    "Add to cart"
                </button>
            </div>
        </Modal>
    }
}
