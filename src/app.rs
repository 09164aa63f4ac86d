//! Khsa Frontend App
//!
//! Root component: provides the store and services, persists the session
//! and cart, and declares the route table.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{AppLayout, ConfirmModal, Protected, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Role;
use crate::pages::admin::{AdminDashboardPage, AdminRestaurantsPage, ApplicationsPage, UsersPage};
use crate::pages::auth::{
    ForgotPasswordPage, LoginPage, OAuthCallbackPage, RegisterPage, ResetPasswordPage,
    VerifyEmailPage, VerifyPhonePage,
};
use crate::pages::orders::{OrderDetailPage, OrdersPage};
use crate::pages::portal::{
    ManageMenuPage, PortalDashboardPage, PortalOrdersPage, RestaurantSettingsPage, StatisticsPage,
    TeamPage,
};
use crate::pages::restaurants::{RestaurantDetailPage, RestaurantsPage};
use crate::pages::user::{AddressesPage, ApplyRestaurantPage, ChangePasswordPage, ProfilePage};
use crate::pages::{NotFoundPage, UnauthorizedPage};
use crate::persist::{self, LocalStorage};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::restore(&LocalStorage));
    provide_context(store);

    let client = api::new_client(&config, store);
    provide_context(AppContext::new(config, client));

    // Persist session and cart on every change
    Effect::new(move |_| {
        persist::save(&LocalStorage, persist::AUTH_KEY, &*store.session().read());
    });
    Effect::new(move |_| {
        persist::save(&LocalStorage, persist::CART_KEY, &*store.cart().read());
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                // Public
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/oauth/callback") view=OAuthCallbackPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                <Route path=path!("/reset-password") view=ResetPasswordPage />
                <Route path=path!("/verify-email") view=VerifyEmailPage />
                <Route path=path!("/unauthorized") view=UnauthorizedPage />

                <ParentRoute path=path!("") view=AppLayout>
                    // Any signed-in customer
                    <Route path=path!("/") view=|| view! { <Protected><RestaurantsPage /></Protected> } />
                    <Route
                        path=path!("/restaurants/:id")
                        view=|| view! { <Protected><RestaurantDetailPage /></Protected> }
                    />
                    <Route path=path!("/profile") view=|| view! { <Protected><ProfilePage /></Protected> } />
                    <Route
                        path=path!("/verify-phone")
                        view=|| view! { <Protected><VerifyPhonePage /></Protected> }
                    />
                    <Route path=path!("/orders") view=|| view! { <Protected><OrdersPage /></Protected> } />
                    <Route
                        path=path!("/orders/:id")
                        view=|| view! { <Protected><OrderDetailPage /></Protected> }
                    />
                    <Route
                        path=path!("/change-password")
                        view=|| view! { <Protected><ChangePasswordPage /></Protected> }
                    />
                    <Route
                        path=path!("/apply-restaurant")
                        view=|| view! { <Protected><ApplyRestaurantPage /></Protected> }
                    />
                    <Route
                        path=path!("/addresses")
                        view=|| view! { <Protected><AddressesPage /></Protected> }
                    />

                    // Restaurant staff
                    <Route
                        path=path!("/portal")
                        view=|| view! { <Protected roles=Role::PORTAL><PortalDashboardPage /></Protected> }
                    />
                    <Route
                        path=path!("/portal/orders")
                        view=|| view! { <Protected roles=Role::PORTAL><PortalOrdersPage /></Protected> }
                    />
                    <Route
                        path=path!("/portal/menu")
                        view=|| view! { <Protected roles=Role::PORTAL><ManageMenuPage /></Protected> }
                    />
                    <Route
                        path=path!("/portal/settings")
                        view=|| view! { <Protected roles=Role::PORTAL><RestaurantSettingsPage /></Protected> }
                    />
                    <Route
                        path=path!("/portal/team")
                        view=|| view! { <Protected roles=Role::PORTAL><TeamPage /></Protected> }
                    />
                    <Route
                        path=path!("/portal/statistics")
                        view=|| view! { <Protected roles=Role::PORTAL><StatisticsPage /></Protected> }
                    />

                    // Site administration
                    <Route
                        path=path!("/admin")
                        view=|| view! { <Protected roles=Role::ADMIN><AdminDashboardPage /></Protected> }
                    />
                    <Route
                        path=path!("/admin/users")
                        view=|| view! { <Protected roles=Role::ADMIN><UsersPage /></Protected> }
                    />
                    <Route
                        path=path!("/admin/applications")
                        view=|| view! { <Protected roles=Role::ADMIN><ApplicationsPage /></Protected> }
                    />
                    <Route
                        path=path!("/admin/restaurants")
                        view=|| view! { <Protected roles=Role::ADMIN><AdminRestaurantsPage /></Protected> }
                    />
                </ParentRoute>
            </Routes>

            <ConfirmModal />
            <ToastHost />
        </Router>
    }
}
