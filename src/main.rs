use leptos::prelude::*;
use theme_toggle::app::App;
use theme_toggle::config::AppConfig;
use theme_toggle::logging;
use tracing::warn;

fn main() {
    let loaded = AppConfig::from_document();
    let config = loaded.clone().unwrap_or_default();
    logging::init(&config.log_filter);
    if let Err(e) = loaded {
        warn!("Using default configuration: {}", e);
    }

    let theme = config.theme;
    leptos::mount::mount_to_body(move || view! { <App config=theme /> });
}
