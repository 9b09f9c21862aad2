//! # client
//!
//! Leptos + WASM frontend for the Jetson OS cloner guide.
//!
//! This crate contains the static step content, the guide navigator and
//! assistant state machines, their components, and the wire types shared
//! with the `server` crate's assistant relay.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
