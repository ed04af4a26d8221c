//! Shared UI components for the portfolio page.

pub mod icon;
pub mod layout;
pub mod nav;
pub mod section;
pub mod theme;

pub use icon::Icon;
pub use layout::{Footer, Layout};
pub use nav::Header;
pub use section::Section;
pub use theme::ThemeToggle;
