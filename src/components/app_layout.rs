//! App Layout Component
//!
//! Navbar around the routed page. On sign-in it refreshes the profile and
//! the address book.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;

use crate::api;
use crate::components::Navbar;
use crate::context::use_app_context;
use crate::store::{store_update_user, use_app_store, AppStateStoreFields};

#[component]
pub fn AppLayout() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let authenticated = Memo::new(move |_| store.session().read().is_authenticated);

    Effect::new(move |_| {
        if !authenticated.get() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api::get_me(&api).await {
                Ok(user) => store_update_user(&store, user),
                Err(e) => log::warn!("[APP] could not refresh profile: {e}"),
            }

            let all = match api::list_addresses(&api).await {
                Ok(list) => {
                    store.addresses().write().set_addresses(list.clone());
                    Some(list)
                }
                Err(e) => {
                    log::warn!("[ADDRESS] could not load addresses: {e}");
                    None
                }
            };
            let default = api::default_address(&api).await.unwrap_or_else(|e| {
                log::warn!("[ADDRESS] could not load default address: {e}");
                None
            });
            store.addresses().write().apply_default(default, all);
        });
    });

    view! {
        <div class="app-shell">
            <Navbar />
            <main class="app-main">
                <Outlet />
            </main>
        </div>
    }
}
