//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dialog;
mod format;
mod models;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    log::info!("Starting, API base {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
