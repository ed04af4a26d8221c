//! Featured projects with technology tags.

use dioxus::prelude::*;

use crate::app::components::Section;
use crate::app::content::PROJECTS;

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        Section { id: "portfolio",
            h2 { "Featured Projects" }
            div { class: "grid",
                for project in PROJECTS {
                    div { key: "{project.title}", class: "card portfolio-card",
                        h3 { "{project.title}" }
                        p { "{project.description}" }
                        div { class: "tags",
                            for tag in project.tags {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
