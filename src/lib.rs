//! Nora landing page
//!
//! Server-rendered landing page with client-side effects (starfield, typing
//! text, scroll reveals, waitlist signup, ambient audio), built with Leptos
//! and WebAssembly.

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
