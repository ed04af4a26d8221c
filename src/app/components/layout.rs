//! Layout component wrapping the page with header, main and footer.

use chrono::Datelike;
use dioxus::prelude::*;

use super::nav::Header;
use crate::app::content::{FOOTER_LINKS, OWNER_NAME};
use crate::view_state::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    pub theme: Theme,
    pub on_toggle: EventHandler<MouseEvent>,
    /// Page content
    pub children: Element,
}

/// Main layout component.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        document::Title { "{OWNER_NAME} - Portfolio" }

        Header { theme: props.theme, on_toggle: props.on_toggle }
        main { {props.children} }
        Footer {}
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { "© {year} {OWNER_NAME}. All rights reserved." }
                div { class: "footer-links",
                    for link in FOOTER_LINKS {
                        a { key: "{link.href}", href: link.href, "{link.label}" }
                    }
                }
            }
        }
    }
}
