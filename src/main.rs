//! Shopping Lists Frontend Entry Point

mod app;
mod components;
mod config;
mod gesture;
mod lists;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless
    let _ = console_log::init_with_level(config::log_level());
    mount_to_body(App);
}
