//! # client
//!
//! Leptos + WASM frontend for Forcastock: landing page, navigation drawer,
//! and the login / registration forms that talk to the auth backend.
//!
//! The same crate is compiled twice: with `ssr` it is rendered by the
//! `forcastock` server, with `hydrate` it runs in the browser and takes over
//! the server-rendered markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point. Installs the console logger and hydrates `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
