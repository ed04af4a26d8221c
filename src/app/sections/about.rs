//! Bio with a generated initials avatar.

use dioxus::prelude::*;

use crate::app::components::Section;
use crate::app::content::{BIO, INITIALS};

#[component]
pub fn About() -> Element {
    rsx! {
        Section { id: "about",
            h2 { "About Me" }
            div { class: "about-content",
                div { class: "profile-pic-container", Avatar {} }
                div { class: "bio",
                    for paragraph in BIO {
                        p { key: "{paragraph}", "{paragraph}" }
                    }
                }
            }
        }
    }
}

/// Gradient circle with initials; colours follow the theme variables.
#[component]
fn Avatar() -> Element {
    rsx! {
        svg {
            class: "profile-pic",
            "viewBox": "0 0 100 100",
            "aria-label": "An avatar image of Akhilesh",
            "xmlns": "http://www.w3.org/2000/svg",
            defs {
                linearGradient {
                    id: "avatarGradient",
                    "x1": "0%",
                    "y1": "0%",
                    "x2": "100%",
                    "y2": "100%",
                    stop { "offset": "0%", "stop-color": "var(--primary-color)" }
                    stop { "offset": "100%", "stop-color": "var(--primary-hover-color)" }
                }
            }
            circle { "cx": "50", "cy": "50", "r": "48", "fill": "url(#avatarGradient)" }
            text {
                "x": "50",
                "y": "68",
                "font-family": "Inter, sans-serif",
                "font-size": "45",
                "fill": "#fff",
                "text-anchor": "middle",
                "font-weight": "bold",
                "{INITIALS}"
            }
        }
    }
}
