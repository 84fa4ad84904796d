//! # furniture-finder
//!
//! Leptos + WASM frontend for the furniture recommendation service.
//!
//! Users describe furniture in natural language on the search view; each
//! query goes to the remote recommender and the returned products are shown
//! inline in a running conversation. A second view renders catalog analytics.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
