//! Page section that picks up the reveal marker once scrolled into view.

use dioxus::prelude::*;

use crate::app::reveal::use_reveal;

#[derive(Props, Clone, PartialEq)]
pub struct SectionProps {
    /// Element id, also the in-page anchor
    pub id: &'static str,
    /// Extra classes besides the reveal marker
    #[props(default)]
    pub class: &'static str,
    pub children: Element,
}

#[component]
pub fn Section(props: SectionProps) -> Element {
    let reveal = use_reveal();
    let class = reveal.class_for(props.id, props.class);

    rsx! {
        section { id: props.id, class: "{class}",
            div { class: "container", {props.children} }
        }
    }
}
