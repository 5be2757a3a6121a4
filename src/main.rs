//! Back-Office Console
//!
//! Administrative dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration against the back-office API
//! - Bearer-token session kept in browser local storage
//! - Protected dashboard shell with collapsible sidebar
//! - CRUD management of staff position records
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives behind the remote REST API; the client holds
//! only the session token and transient per-screen state.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
