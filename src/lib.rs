//! # projection-front
//!
//! Leptos + WASM front-end for the consciousness projection app.
//!
//! This crate contains the route table and auth guard, the navigation and
//! session stores, and the intercepting HTTP client for the `/api` backend.
//! Browser glue is gated behind the `csr` feature; without it every browser
//! seam degrades to an inert implementation so the logic runs in unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let config = config::AppConfig::from_build_env();
    util::logging::init(config.log_level);
    log::info!("starting with api base {}", config.api.base_path);
    leptos::mount::mount_to_body(app::App);
}
