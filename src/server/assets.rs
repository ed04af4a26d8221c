//! Embedded static assets for single-binary distribution.
//!
//! The stylesheet and favicon are compiled into the binary with include_str!.
//! The favicon is also exposed as a base64 data URL so the page head needs
//! no extra request for it.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::LazyLock;

/// Page stylesheet (light/dark variables keyed on `data-theme`, reveal transition)
pub const STYLESHEET_CSS: &str = include_str!("../../public/portfolio.css");

/// Avatar-style favicon
pub const FAVICON_SVG: &str = include_str!("../../public/favicon.svg");

/// Favicon as data URL (lazily encoded)
pub static FAVICON_DATA_URL: LazyLock<String> = LazyLock::new(|| {
    format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(FAVICON_SVG.as_bytes())
    )
});
