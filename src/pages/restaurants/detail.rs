//! Restaurant Detail Page
//!
//! Header, menu grid and cart. Picking an item opens the customization
//! dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{CartPanel, ItemCustomization, MenuItemCard};
use crate::context::use_app_context;
use crate::models::{MenuItem, Restaurant};
use crate::pagination::RequestSeq;

#[component]
pub fn RestaurantDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();

    let restaurant_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok())));

    let (restaurant, set_restaurant) = signal(None::<Restaurant>);
    let (menu, set_menu) = signal(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);
    let chosen = RwSignal::new(None::<MenuItem>);
    let seq = StoredValue::new_local(RequestSeq::new());

    Effect::new(move |_| {
        let Some(id) = restaurant_id.get() else {
            set_loading.set(false);
            return;
        };
        let ticket = seq.with_value(RequestSeq::next);
        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let details = api::get_restaurant(&api, id).await;
            let items = api::get_menu(&api, id).await;
            if seq.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                return;
            }
            match details {
                Ok(r) => set_restaurant.set(Some(r)),
                Err(e) => ctx.toast_api_error(&e, "Could not load the restaurant."),
            }
            match items {
                Ok(list) => set_menu.set(list),
                Err(e) => ctx.toast_api_error(&e, "Could not load the menu."),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted centered">"Loading..."</p> }
            >
                {move || match restaurant.get() {
                    None => view! { <p class="muted centered">"Restaurant not found."</p> }.into_any(),
                    Some(r) => {
                        let logo = r.logo_url.as_deref().map(|src| ctx.image_url(src));
                        view! {
                            <header class="restaurant-header">
                                {logo.map(|src| view! { <img class="logo" src=src alt="" /> })}
                                <div>
                                    <h1>{r.name}</h1>
                                    <p class="muted">{r.address}</p>
                                    {r.description.map(|d| view! { <p>{d}</p> })}
                                </div>
                            </header>
                        }
                            .into_any()
                    }
                }}
                <div class="menu-layout">
                    <section class="menu-grid">
                        <Show
                            when=move || !menu.with(Vec::is_empty)
                            fallback=|| view! { <p class="muted">"This restaurant has no menu items yet."</p> }
                        >
                            {move || {
                                menu.get()
                                    .into_iter()
                                    .map(|item| {
                                        let picked = item.clone();
                                        view! {
                                            <MenuItemCard
                                                item=item
                                                on_select=move |_| chosen.set(Some(picked.clone()))
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </section>
                    <CartPanel />
                </div>
            </Show>
            <ItemCustomization item=chosen />
        </div>
    }
}
