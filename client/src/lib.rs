//! # client
//!
//! Leptos + WASM frontend for the medical report analyzer: an upload form
//! that posts one report to the analysis backend, and a results page that
//! renders the backend's verdict.
//!
//! Built with `ssr` for the host's server-side render and with `hydrate` for
//! the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: read the injected config and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::ClientConfig::from_document();
    log::info!("hydrating with backend {:?}", config.backend_url());
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
