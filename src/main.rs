#![allow(warnings)]
//! Product Card Frontend Entry Point

mod app;
mod cart;
mod components;
mod context;
mod element;
mod fetch;

use app::App;
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = console_logger::init_logger(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    element::register();
    if element::used_on_page() {
        // Embedded: each <product-card> mounts its own widget
        return;
    }
    mount_to_body(App);
}
