//! Light/dark theme state.
//!
//! The document-wide `data-theme` attribute has exactly one writer: the
//! [`ThemeController`]. Everything else reads [`Theme`] snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root attribute the stylesheet keys its colour variables on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Theme options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to the default (light).
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Accessible label for the toggle button: names the mode a click switches to.
    pub fn toggle_label(&self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External slot the current theme is mirrored into (the root element's
/// `data-theme` attribute in a browser).
pub trait ThemeSlot {
    fn write(&mut self, theme: Theme);
}

/// Owns the active theme and keeps its slot in sync.
#[derive(Debug)]
pub struct ThemeController<S: ThemeSlot> {
    current: Theme,
    slot: S,
}

impl<S: ThemeSlot> ThemeController<S> {
    /// Create the controller and mirror the initial theme into the slot.
    pub fn new(initial: Theme, mut slot: S) -> Self {
        slot.write(initial);
        Self {
            current: initial,
            slot,
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Flip light/dark, write the new value to the slot and return it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.slot.write(self.current);
        tracing::debug!("Theme switched to {}", self.current);
        self.current
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }
}
