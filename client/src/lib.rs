//! # hrdesk-client
//!
//! Leptos + WASM frontend for the HR employee-management desk.
//!
//! This crate contains the pages, components, client stores, the async
//! operations that drive them, and the typed REST client for the remote
//! employee-records API. The `hrdesk-server` crate renders [`app::App`] on
//! the server; the `hydrate` feature builds the browser bundle.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
