//! Ribas Karpaty landing page, client-side rendered with Leptos.
//!
//! `state` and `i18n` are plain Rust and test natively. Everything that
//! touches the browser sits behind the `web` feature.

pub mod i18n;
pub mod state;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
pub mod pages;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
use leptos::prelude::*;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
