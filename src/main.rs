//! Khsa Frontend Entry Point

mod address_book;
mod api;
mod app;
mod cart;
mod chime;
mod components;
mod config;
mod context;
mod debounce;
mod geo;
mod guard;
mod jwt;
mod models;
mod order_queue;
mod pages;
mod pagination;
mod persist;
mod session;
mod store;
mod toast;
mod validation;

use app::App;
use leptos::prelude::*;

use crate::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = AppConfig::from_env();
    let _ = console_log::init_with_level(config.log_level);
    config::report(&problems);
    log::info!("[APP] starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
