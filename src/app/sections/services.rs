//! Areas of expertise.

use dioxus::prelude::*;

use crate::app::components::{Icon, Section};
use crate::app::content::SERVICES;

#[component]
pub fn Services() -> Element {
    rsx! {
        Section { id: "services",
            h2 { "Areas of Expertise" }
            div { class: "grid",
                for service in SERVICES {
                    div { key: "{service.title}", class: "card",
                        Icon { class: "card-icon", path: service.icon }
                        h3 { "{service.title}" }
                        p { "{service.description}" }
                    }
                }
            }
        }
    }
}
