//! Raw Gallery Portfolio Entry Point

mod models;
mod config;
mod error;
mod store;
mod context;
mod routes;
mod layout;
mod timer;
mod contact;
mod clock;
mod markdown;
mod browser;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }

    // Load content before the first render
    store::portfolio();
    mount_to_body(App);
}
