//! Routed Pages

pub mod admin;
pub mod auth;
pub mod orders;
pub mod portal;
pub mod restaurants;
pub mod user;

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page centered">
            <h1>"404"</h1>
            <p class="muted">"This page does not exist."</p>
            <A href="/" attr:class="btn primary">"Back home"</A>
        </div>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="page centered">
            <h1>"Access denied"</h1>
            <p class="muted">"Your account is not allowed to open this page."</p>
            <A href="/" attr:class="btn primary">"Back home"</A>
        </div>
    }
}
