//! Quotes from colleagues.

use dioxus::prelude::*;

use crate::app::components::{Icon, Section};
use crate::app::content::{QUOTE_ICON, TESTIMONIALS};

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        Section { id: "testimonials",
            h2 { "What Others Say" }
            div { class: "grid",
                for testimonial in TESTIMONIALS {
                    div { key: "{testimonial.author}", class: "card testimonial-card",
                        Icon { class: "quote-icon", path: QUOTE_ICON }
                        p {
                            em { "\"{testimonial.quote}\"" }
                        }
                        p { class: "author",
                            "{testimonial.author} "
                            span { "- {testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}
