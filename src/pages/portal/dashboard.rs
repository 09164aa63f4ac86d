use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Role;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PortalDashboardPage() -> impl IntoView {
    let store = use_app_store();
    let is_manager = move || {
        store
            .session()
            .read()
            .user
            .as_ref()
            .is_some_and(|u| u.role == Role::RestaurantManager)
    };

    view! {
        <div class="page">
            <h1>"Restaurant portal"</h1>
            <div class="tile-grid">
                <A href="/portal/orders" attr:class="tile">
                    <h3>"Orders"</h3>
                    <p class="muted">"Accept and track incoming orders"</p>
                </A>
                <A href="/portal/menu" attr:class="tile">
                    <h3>"Menu"</h3>
                    <p class="muted">"Add, edit and remove dishes"</p>
                </A>
                <A href="/portal/statistics" attr:class="tile">
                    <h3>"Statistics"</h3>
                    <p class="muted">"Sales over time"</p>
                </A>
                <Show when=is_manager>
                    <A href="/portal/settings" attr:class="tile">
                        <h3>"Settings"</h3>
                        <p class="muted">"Name, address and delivery area"</p>
                    </A>
                    <A href="/portal/team" attr:class="tile">
                        <h3>"Team"</h3>
                        <p class="muted">"Manage restaurant admins"</p>
                    </A>
                </Show>
            </div>
        </div>
    }
}
