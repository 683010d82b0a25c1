//! Shop Admin Panel Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod notify;
mod panel;
mod resource;
mod store;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
