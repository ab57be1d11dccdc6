//! Pokédex Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod detail;
mod graphql;
mod models;
mod routes;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    _ = console_log::init_with_level(config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
