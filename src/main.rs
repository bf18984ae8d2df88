//! Menu Browser Frontend Entry Point

mod models;
mod api;
mod config;
mod context;
mod store;
mod theme;
mod query_state;
mod menu_query;
mod customization;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
