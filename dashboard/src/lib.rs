//! # dashboard
//!
//! Leptos + WASM admin UI for SoukSync. Server-rendered by the `server` crate
//! and hydrated in the browser.
//!
//! Session rules live in the `souksync` core; this crate bridges the session's
//! watch channel into Leptos signals, renders the route guard, and hosts the
//! pages that consume the API client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
