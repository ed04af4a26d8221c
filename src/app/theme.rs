//! Theme context for the light/dark toggle.
//!
//! The context wraps a [`ThemeController`] in a signal so the header
//! re-renders on toggle, while the controller keeps the root element's
//! `data-theme` attribute in sync. Nothing is persisted: every page load
//! starts in the default (light) theme.

use dioxus::prelude::*;

use crate::view_state::{Theme, ThemeController, ThemeSlot};

/// Slot backed by `<html data-theme>` on the client; a no-op during SSR,
/// where the document shell writes the attribute instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentThemeSlot;

impl ThemeSlot for DocumentThemeSlot {
    fn write(&mut self, theme: Theme) {
        #[cfg(target_arch = "wasm32")]
        apply_theme_to_dom(theme);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = theme;
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController<DocumentThemeSlot>>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        self.controller.read().get()
    }

    /// Flip the theme and mirror it to the document
    pub fn toggle(&self) -> Theme {
        let mut controller = self.controller;
        let theme = controller.write().toggle();
        tracing::info!("Theme toggled to {}", theme);
        theme
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() -> ThemeContext {
    let controller = use_signal(|| ThemeController::new(Theme::default(), DocumentThemeSlot));
    use_context_provider(|| ThemeContext { controller })
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    use crate::view_state::theme::THEME_ATTRIBUTE;

    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        tracing::warn!("No document element, theme {} not applied", theme);
        return;
    };

    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        tracing::warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, e);
    }
}
