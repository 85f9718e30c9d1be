//! # gamelog-ui
//!
//! Leptos + WASM single-page frontend for a game-catalog/article site.
//!
//! This crate contains the route table and navigation guard, the typed
//! HTTP client for the games API, the session state, and the thin page
//! components the router resolves to.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: set up panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
