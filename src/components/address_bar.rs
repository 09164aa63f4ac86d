//! Address Bar Component
//!
//! "Deliver to" selector above the restaurant list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, ApiClient};
use crate::context::{use_app_context, AppContext};
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// Reloads the saved addresses. Selects the first one when nothing is
/// selected yet.
pub async fn reload_addresses(api: &ApiClient, store: AppStore) {
    match api::list_addresses(api).await {
        Ok(list) => {
            let field = store.addresses();
            let mut book = field.write();
            if book.selected.is_none() {
                book.apply_default(None, Some(list.clone()));
            }
            book.set_addresses(list);
        }
        Err(e) => log::warn!("[ADDRESS] reload failed: {e}"),
    }
}

/// Selects an address locally, then makes it the server default and
/// reloads the list.
pub fn select_address(ctx: AppContext, store: AppStore, id: u32) {
    if store.addresses().write().select(id).is_none() {
        return;
    }
    let api = ctx.api();
    spawn_local(async move {
        if let Err(e) = api::set_default_address(&api, id).await {
            ctx.toast_api_error(&e, "Could not update the default address.");
            return;
        }
        reload_addresses(&api, store).await;
    });
}

#[component]
pub fn AddressBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let loading = move || store.addresses().read().is_loading;
    let has_addresses = move || !store.addresses().read().addresses.is_empty();
    let selected_id = move || {
        store
            .addresses()
            .read()
            .selected
            .as_ref()
            .map(|a| a.id.to_string())
            .unwrap_or_default()
    };

    let on_change = move |ev| {
        if let Ok(id) = event_target_value(&ev).parse::<u32>() {
            select_address(ctx, store, id);
        }
    };

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! { <div class="panel muted">"Loading addresses..."</div> }
        >
            <Show
                when=has_addresses
                fallback=|| {
                    view! {
                        <div class="panel centered">
                            <h2>"Where should we deliver?"</h2>
                            <p class="muted">"Add an address to see restaurants that deliver to you."</p>
                            <A href="/addresses" attr:class="btn primary">"Add an address"</A>
                        </div>
                    }
                }
            >
                <div class="panel address-bar">
                    <label>
                        <span class="strong">"Deliver to: "</span>
                        <select prop:value=selected_id on:change=on_change>
                            {move || {
                                store
                                    .addresses()
                                    .read()
                                    .addresses
                                    .iter()
                                    .map(|a| {
                                        view! { <option value=a.id.to_string()>{a.delivery_text()}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <A href="/addresses">"Manage addresses"</A>
                </div>
            </Show>
        </Show>
    }
}
