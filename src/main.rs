//! Fatalities Dashboard
//!
//! Mounts the dashboard to the document body.

use leptos::*;

use fatalities_dashboard::app::App;
use fatalities_dashboard::config::DashboardConfig;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match DashboardConfig::embedded() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };
    let config = config.with_storage_override();

    let level = config.logging.level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    if let Some(e) = config_error {
        log::warn!("Using default config: {}", e);
    }
    log::info!("Fatalities dashboard v{}", env!("CARGO_PKG_VERSION"));
    log::info!("API endpoint: {}", config.api.url);

    mount_to_body(move || view! { <App config=config /> });
}
