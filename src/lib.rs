//! # contact-page
//!
//! Leptos + WASM contact form: collects name, email and message, validates
//! them in the browser, and submits them with a single `createContact`
//! GraphQL mutation.
//!
//! This crate contains the page, its form components, the form and toast
//! state, the wire types, and the HTTP call. Built with `hydrate` for the
//! browser bundle and with `ssr` for the server-rendered shell.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(|| {
        use leptos::prelude::*;

        use crate::app::App;
        view! { <App/> }
    });
}
