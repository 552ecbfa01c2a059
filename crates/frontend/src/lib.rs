pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use app::App;
use contracts::system::config::{load_config, AppConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = load_config();

    // initializes logging using the `log` crate
    let level = loaded
        .as_ref()
        .map(AppConfig::log_level)
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = loaded.unwrap_or_else(|e| {
        log::error!("Failed to load configuration, using defaults: {e:#}");
        AppConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
