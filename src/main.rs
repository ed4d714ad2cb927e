use kanban_board::domain::BoardConfig;
use kanban_board::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Log everything until the config has picked the real level.
    // A second init only happens on hot reload; keep the existing logger.
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = BoardConfig::load_or_default();
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("Starting {}", config.title);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
