//! Menu item row; clicking opens the customization dialog.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{format_price, MenuItem};

#[component]
pub fn MenuItemCard(item: MenuItem, #[prop(into)] on_select: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let thumbnail = item.images.first().map(|src| ctx.image_url(src));
    let available = item.is_available;

    view! {
        <button
            type="button"
            class=if available { "menu-item-card" } else { "menu-item-card unavailable" }
            disabled=!available
            on:click=move |_| on_select.run(())
        >
            <div class="menu-item-text">
                <h4>{item.name.clone()}</h4>
                <p class="muted">{item.description.clone().unwrap_or_default()}</p>
                <p class="price">{format_price(item.price)}</p>
                {(!available).then(|| view! { <span class="badge">"Unavailable"</span> })}
            </div>
            {thumbnail.map(|src| view! { <img class="thumb" src=src alt=item.name.clone() /> })}
            <span class="add-icon">"+"</span>
        </button>
    }
}
