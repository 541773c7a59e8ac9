//! CivicTracker Frontend Entry Point

mod app;
mod clock;
mod components;
mod context;
mod location;
mod pages;
mod store;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("CivicTracker dashboard starting");
    mount_to_body(App);
}
