//! VectorShield Dashboard
//!
//! Client-side disease outbreak surveillance dashboard built with Leptos
//! (WASM). Each page polls the VectorShield API on a fixed interval, keeps
//! the last good snapshot while the backend is unreachable, and derives all
//! of its views from that snapshot with pure transforms.

use leptos::*;

mod api;
mod app;
mod components;
mod export;
mod model;
mod pages;
mod poll;
mod state;
mod transform;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
