//! Portfolio Site
//!
//! A single-page personal portfolio rendered with Dioxus.
//!
//! This library provides:
//! - Theme and reveal-on-scroll view state, independent of the browser
//! - The Dioxus component tree (server-rendered and mounted by the wasm client)
//! - An axum server that renders the page and serves its embedded assets

pub mod app;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
pub mod view_state;
