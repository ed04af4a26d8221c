//! Page header: logo, in-page navigation and the theme toggle.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::content::{BRAND, NAV_LINKS};
use crate::view_state::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle: EventHandler<MouseEvent>,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        header { class: "header",
            div { class: "container navbar",
                a { href: "#home", class: "nav-logo", "{BRAND}" }
                nav {
                    ul { class: "nav-links",
                        for link in NAV_LINKS {
                            li { key: "{link.href}", class: "nav-link",
                                a { href: link.href, "{link.label}" }
                            }
                        }
                    }
                }
                ThemeToggle { theme: props.theme, on_toggle: props.on_toggle }
            }
        }
    }
}
