//! Dois de Muitos Site
//!
//! Living archive page built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. On mount the app fetches `/events.json`,
//! `/nfts.json`, `/projetos.json` and `/ajudas.json` concurrently, then
//! renders the cards and drives the helix background on a canvas. The
//! loading, view-model and scene rules live in the `dois-de-muitos` crate;
//! this crate binds them to the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod scene;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
