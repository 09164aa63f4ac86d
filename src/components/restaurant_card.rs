//! Restaurant tile linking to its menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::models::Restaurant;

#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let ctx = use_app_context();
    let logo = restaurant.logo_url.as_deref().map(|src| ctx.image_url(src));

    view! {
        <A href=format!("/restaurants/{}", restaurant.id) attr:class="restaurant-card">
            {logo.map(|src| view! { <img class="logo" src=src alt="" /> })}
            <div class="restaurant-card-body">
                <h3>{restaurant.name}</h3>
                <p class="muted">{restaurant.address}</p>
                {restaurant.description.map(|d| view! { <p class="description">{d}</p> })}
            </div>
        </A>
    }
}
