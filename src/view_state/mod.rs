//! Platform-independent view state for the portfolio page.
//!
//! Both controllers talk to the browser only through small traits, so the
//! web client plugs in DOM-backed implementations while tests use in-memory
//! ones:
//! - [`theme`] - light/dark theme with a single writer for `data-theme`
//! - [`reveal`] - one-way "revealed" latch per section driven by viewport
//!   intersection events

pub mod reveal;
pub mod theme;

pub use reveal::{
    EntryCallback, IntersectionEntry, IntersectionSource, RevealController, RevealError,
    RevealOptions, RevealState, RevealSubscription, SectionId, SectionMarker, ViewportObserver,
};
pub use theme::{Theme, ThemeController, ThemeSlot};
