//! # asciiboard
//!
//! Leptos + WASM frontend for the ascii-art-web service. Replaces the
//! server-templated HTML form with a Rust-native UI layer.
//!
//! This crate contains the studio page, its form and preview components,
//! and the network helpers that talk to the `/ascii-art` and `/export`
//! endpoints. All form, color, scheduling, and request-shaping logic
//! lives in the `controls` crate so it stays testable off the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered document in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
