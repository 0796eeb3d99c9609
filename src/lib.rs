//! # vitrine
//!
//! Leptos + WASM front-end for the Vitrine storefront's product photo
//! experience. The interesting part lives behind the product gallery: a
//! full-screen magnification overlay with a pointer-tracking lens
//! (click-and-drag on desktop, pinch on touch) backed by the `magnifier`
//! engine crate. Catalog data, cart, checkout, and the commerce backend are
//! external to this crate; the product page here renders a fixed demo
//! product to exercise the viewer.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
