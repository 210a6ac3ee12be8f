//! # client
//!
//! Leptos + WASM front end for the agency portal.
//!
//! This crate contains pages, components, reactive application state, and the
//! browser networking layer (REST calls and the streaming project chat). Pure
//! derivation rules live in the `workflow` crate; this crate wires them to
//! signals and markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
