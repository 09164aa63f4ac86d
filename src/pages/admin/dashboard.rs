use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Administration"</h1>
            <div class="tile-grid">
                <A href="/admin/users" attr:class="tile">
                    <h3>"Users"</h3>
                    <p class="muted">"Roles and bans"</p>
                </A>
                <A href="/admin/restaurants" attr:class="tile">
                    <h3>"Restaurants"</h3>
                    <p class="muted">"Suspend, reinstate or delete"</p>
                </A>
                <A href="/admin/applications" attr:class="tile">
                    <h3>"Applications"</h3>
                    <p class="muted">"Review new partner requests"</p>
                </A>
            </div>
        </div>
    }
}
