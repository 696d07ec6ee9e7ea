#![allow(warnings)]
//! EduSearch Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logger;
mod models;
mod pages;
mod router;
mod search;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::config().log_level);
    log::info!("api base: {}", config::config().api_base_url);
    mount_to_body(App);
}
