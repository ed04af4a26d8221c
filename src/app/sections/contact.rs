//! Contact call-to-action and social links.

use dioxus::prelude::*;

use crate::app::components::{Icon, Section};
use crate::app::content::{CONTACT_EMAIL, CONTACT_PITCH, SOCIAL_LINKS};

#[component]
pub fn Contact() -> Element {
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    rsx! {
        Section { id: "contact", class: "contact-section",
            h2 { "Get In Touch" }
            div { class: "grid",
                div {
                    p { "{CONTACT_PITCH}" }
                    a { href: "{mailto}", class: "cta-button", "Say Hello" }
                }
                div {
                    h3 { "Connect With Me" }
                    div { class: "social-links-container",
                        for link in SOCIAL_LINKS {
                            a {
                                key: "{link.label}",
                                href: link.href,
                                class: "social-link",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": link.label,
                                Icon { class: "social-icon", path: link.icon, title: link.title }
                            }
                        }
                    }
                }
            }
        }
    }
}
