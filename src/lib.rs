//! # diagnosis-chat
//!
//! Leptos + WASM frontend for a diagnosis chat service. The backend renders
//! the page shell with a JSON bootstrap (user, threads, raw history, flash
//! messages, UI config); this crate mounts the chat UI on top of it.
//!
//! The crate contains pages, components, plain-data state models, network
//! helpers for the chat REST endpoints, and the formatter that turns model
//! replies into styled diagnosis cards. Browser-only code sits behind the
//! `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod format;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
