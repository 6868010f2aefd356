//! # fundboard-ui
//!
//! Leptos frontend for the investor dashboard: a persisted session store,
//! role-based route guards, per-role dashboards and the admin create forms.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only work such as storage access, fetches and timers
//! is gated behind `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
