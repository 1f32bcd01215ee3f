//! Food Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod models;
mod pages;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    if let Some(err) = config_error {
        log::error!("{}; falling back to defaults", err);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
