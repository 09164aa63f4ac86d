//! Navbar Component
//!
//! Brand, role-dependent links and the account menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::context::use_app_context;
use crate::store::{store_logout, use_app_store, AppStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (menu_open, set_menu_open) = signal(false);

    let user = Memo::new(move |_| store.session().read().user.clone());
    let is_portal = move || user.with(|u| u.as_ref().is_some_and(|u| u.role.is_portal()));
    let is_admin = move || user.with(|u| u.as_ref().is_some_and(|u| u.role.is_admin()));
    let cart_count = move || store.cart().read().total_items();

    let logout = move |_| {
        set_menu_open.set(false);
        let api = ctx.api();
        spawn_local(async move {
            // Best effort; the local session is dropped regardless
            if let Err(e) = api::logout(&api).await {
                log::info!("[AUTH] server logout failed: {e}");
            }
            // The route guard then takes the user to the login screen
            store_logout(&store);
            ctx.toast_success("Signed out.");
        });
    };

    let close = move |_| set_menu_open.set(false);

    view! {
        <nav class="navbar">
            <div class="navbar-links">
                <A href="/" attr:class="brand">"Khsa"</A>
                <A href="/">"Home"</A>
                <A href="/orders">"My orders"</A>
                <Show when=is_admin>
                    <A href="/admin" attr:class="admin-link">"Dashboard"</A>
                </Show>
                <span class="cart-badge" title="Items in cart">{cart_count}</span>
            </div>

            <div class="navbar-account">
                <button type="button" class="account-btn" on:click=move |_| set_menu_open.update(|o| *o = !*o)>
                    {move || {
                        user.get()
                            .and_then(|u| u.profile_image_url.clone())
                            .map(|src| view! { <img class="avatar" src=ctx.image_url(&src) alt="" /> })
                    }}
                    <span class="account-name">
                        {move || user.get().map(|u| u.display_name()).unwrap_or_default()}
                    </span>
                </button>

                <Show when=move || menu_open.get()>
                    <div class="account-menu">
                        <div class="account-summary">
                            <p class="account-title">
                                {move || user.get().and_then(|u| u.name).unwrap_or_default()}
                            </p>
                            <p class="account-email">{move || user.get().map(|u| u.email).unwrap_or_default()}</p>
                        </div>
                        <hr />
                        <A href="/profile" on:click=close>"Profile"</A>
                        <A href="/addresses" on:click=close>"Addresses"</A>
                        <Show when=is_portal>
                            <A href="/portal" on:click=close>"Restaurant portal"</A>
                        </Show>
                        <Show when=move || !is_portal() && !is_admin()>
                            <A href="/apply-restaurant" on:click=close>"Partner with us"</A>
                        </Show>
                        <hr />
                        <button type="button" class="menu-item" on:click=logout>
                            "Sign out"
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
