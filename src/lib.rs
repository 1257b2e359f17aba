//! Redshift Web Solutions - marketing site
//!
//! A single-page site for a small web agency with a validated contact form
//! that delivers through EmailJS and falls back to the visitor's mail client,
//! built with Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
