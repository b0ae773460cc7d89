//! # client
//!
//! Leptos + WASM frontend for the LedgerDesk accounting workspace.
//!
//! This crate contains pages, components, client state, network types, the
//! WebSocket transport and the Leptos adapters for the `session` crate's
//! access guard and realtime connection controller.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: validates config, installs logging and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = config::startup_auth_config() {
        log::error!("invalid auth configuration: {e}");
        return;
    }

    leptos::mount::hydrate_body(app::App);
}
