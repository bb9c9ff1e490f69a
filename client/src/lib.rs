//! # client
//!
//! Leptos + WASM frontend for the Marine Visual Studio marketing site.
//!
//! This crate contains the static page content, per-section view state,
//! pure layout math, components, and the home page. The `ssr` feature is used
//! by the server binary for rendering; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
