//! Light/dark theme toggle button.

use dioxus::prelude::*;

use super::icon::Icon;
use crate::app::content::{MOON_ICON, SUN_ICON};
use crate::view_state::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct ThemeToggleProps {
    /// Currently active theme
    pub theme: Theme,
    pub on_toggle: EventHandler<MouseEvent>,
}

/// Button that flips the theme. The label names the mode a click switches
/// to; the icon is a moon in light mode and a sun in dark mode.
#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let on_toggle = props.on_toggle;
    let label = props.theme.toggle_label();
    let icon = match props.theme {
        Theme::Light => MOON_ICON,
        Theme::Dark => SUN_ICON,
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": "{label}",
            title: "{label}",
            onclick: move |evt| on_toggle.call(evt),
            Icon { class: "icon", path: icon }
        }
    }
}
