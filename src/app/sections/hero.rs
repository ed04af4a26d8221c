//! Landing section. Rendered revealed from the start.

use dioxus::prelude::*;

use crate::app::components::Section;
use crate::app::content::{HERO, OWNER_NAME};

#[component]
pub fn Hero() -> Element {
    let subtitle = OWNER_NAME.to_uppercase();

    rsx! {
        Section { id: "home", class: "hero",
            div { class: "hero-content",
                p { class: "subtitle", "{subtitle}" }
                h1 { "{HERO.headline}" }
                p { "{HERO.summary}" }
                a { href: HERO.cta_href, class: "cta-button", "{HERO.cta_label}" }
            }
        }
    }
}
