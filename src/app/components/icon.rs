//! Inline SVG icon on a 24x24 view box.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub class: &'static str,
    /// SVG path data
    pub path: &'static str,
    /// Accessible title; decorative (aria-hidden) when absent
    #[props(default)]
    pub title: Option<&'static str>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    match props.title {
        Some(title) => rsx! {
            svg {
                class: props.class,
                "role": "img",
                "xmlns": "http://www.w3.org/2000/svg",
                "viewBox": "0 0 24 24",
                title { "{title}" }
                path { d: props.path }
            }
        },
        None => rsx! {
            svg {
                class: props.class,
                "aria-hidden": "true",
                "xmlns": "http://www.w3.org/2000/svg",
                "viewBox": "0 0 24 24",
                path { d: props.path }
            }
        },
    }
}
