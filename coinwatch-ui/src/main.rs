//! Coinwatch Dashboard
//!
//! Browser page for the top cryptocurrencies, built with Leptos (WASM).
//!
//! Polls the price API once a minute, lists the top assets and shows the
//! selected one with a 7-day trend chart. The asset model, selection rules
//! and page view model come from the `coinwatch` crate, so the browser and
//! terminal pages show the same thing.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
