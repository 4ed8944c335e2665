//! # zipship-client
//!
//! Leptos + WASM frontend for the Zipship courier marketplace.
//!
//! This crate contains the customer-facing pages (landing CTA, home
//! dashboard with order-status shortcuts, order-list and create-order
//! routes), the seller-side merchant agreement modal, shared client state,
//! and the HTTP helpers that back them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
