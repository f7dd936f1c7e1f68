//! # foodgram
//!
//! Leptos frontend for the foodgram recipe service, plus the Axum host that
//! server-renders it and proxies `/api` to the backend.
//!
//! The `hydrate` feature builds the browser bundle; `ssr` builds the server.
//! Form validation (`form`), session state (`state`) and navigation (`nav`)
//! are plain Rust and test without either feature.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod nav;
pub mod net;
pub mod pages;
pub mod proxy;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
