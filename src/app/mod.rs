//! Dioxus application entry point.
//!
//! The same `App` tree is rendered to HTML by the server and hydrated by the
//! wasm client, which also runs the theme and reveal controllers against the
//! live document.

use dioxus::prelude::*;

pub mod components;
pub mod content;
pub mod reveal;
pub mod sections;
pub mod theme;

use components::Layout;
use reveal::use_reveal_provider;
use sections::{About, Contact, Hero, Portfolio, Services, Testimonials};
use theme::use_theme_provider;

/// Element id the client mounts into (Dioxus web default).
pub const MOUNT_POINT_ID: &str = "main";

/// Root app component
#[component]
pub fn App() -> Element {
    // Theme context at app root (mirrors the theme into <html data-theme>)
    let theme = use_theme_provider();

    // Reveal context at app root (observes sections after mount)
    use_reveal_provider();

    rsx! {
        Layout {
            theme: theme.get(),
            on_toggle: move |_| {
                theme.toggle();
            },
            Hero {}
            Services {}
            Portfolio {}
            About {}
            Testimonials {}
            Contact {}
        }
    }
}

/// Mount the client. Without a mount point the page stays server-rendered.
pub fn launch() {
    #[cfg(target_arch = "wasm32")]
    {
        if !mount_point_present() {
            web_sys::console::warn_1(
                &format!("Mount point #{} not found, client not started", MOUNT_POINT_ID).into(),
            );
            return;
        }
        dioxus::launch(App);
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("The web client only runs on wasm32; build with the server feature to serve the page");
}

#[cfg(target_arch = "wasm32")]
fn mount_point_present() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_POINT_ID))
        .is_some()
}
