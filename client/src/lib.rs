//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the home page, its section components, the local UI
//! state containers, and the helpers for the three content API calls. Built
//! with `hydrate` for the browser bundle and with `ssr` for the server host.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
