use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AddressBar, RestaurantCard};
use crate::context::use_app_context;
use crate::models::Restaurant;
use crate::pagination::RequestSeq;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (restaurants, set_restaurants) = signal(Vec::<Restaurant>::new());
    let (loading, set_loading) = signal(false);
    let seq = StoredValue::new_local(RequestSeq::new());

    let near = Memo::new(move |_| store.addresses().read().selected.as_ref().map(|a| a.location));

    // Refetch whenever the delivery address changes
    Effect::new(move |_| {
        let Some(location) = near.get() else {
            set_restaurants.set(Vec::new());
            return;
        };
        let ticket = seq.with_value(RequestSeq::next);
        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::list_restaurants(&api, Some(location)).await;
            if seq.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(list) => {
                    log::debug!("[RESTAURANTS] {} delivering here", list.len());
                    set_restaurants.set(list);
                }
                Err(e) => ctx.toast_api_error(&e, "Could not load restaurants."),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <AddressBar />
            <Show when=move || near.with(Option::is_some)>
                <h1>"Restaurants near you"</h1>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="muted centered">"Loading restaurants..."</p> }
                >
                    <Show
                        when=move || !restaurants.with(Vec::is_empty)
                        fallback=|| view! { <p class="muted centered">"No restaurants deliver to this address yet."</p> }
                    >
                        <div class="restaurant-grid">
                            {move || {
                                restaurants
                                    .get()
                                    .into_iter()
                                    .map(|restaurant| view! { <RestaurantCard restaurant=restaurant /> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
