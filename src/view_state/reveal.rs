//! Reveal-on-scroll tracking for page sections.
//!
//! Each observed section starts hidden (except the home section, which is
//! revealed up front so above-the-fold content never flashes hidden) and
//! latches to revealed the first time it is at least `threshold` visible.
//! Revealed is terminal.
//!
//! The browser pieces are traits:
//! - [`IntersectionSource`] creates a [`ViewportObserver`] that delivers
//!   [`IntersectionEntry`] batches to a callback
//! - [`SectionMarker`] attaches the presentation marker to a revealed section
//!
//! [`RevealController::attach`] returns a [`RevealSubscription`] that owns the
//! observer. Dropping or unsubscribing it stops observation; deliveries that
//! still arrive afterwards are ignored.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default visibility fraction before a section counts as seen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// CSS class applied to revealed sections.
pub const REVEALED_CLASS: &str = "visible";

/// Element id of a page section.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    /// The first section, pre-revealed at attach time.
    pub const HOME: &'static str = "home";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == Self::HOME
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One observation record: which section, whether it intersects the
/// viewport, and the fraction of it currently visible.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<SectionId>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
            ratio,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("reveal threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction (0.0..=1.0) at which a section is revealed.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(threshold: f64) -> Result<Self, RevealError> {
        let options = Self { threshold };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), RevealError> {
        if self.threshold.is_finite() && (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(RevealError::InvalidThreshold(self.threshold))
        }
    }
}

/// Callback an observer invokes with each batch of entries.
pub type EntryCallback = Box<dyn FnMut(Vec<IntersectionEntry>)>;

/// Viewport intersection primitive (`IntersectionObserver` in a browser).
pub trait IntersectionSource {
    /// Create an observer that reports entries at `threshold`.
    /// Returns `None` when the environment has no such primitive.
    fn observer(
        &self,
        threshold: f64,
        on_entries: EntryCallback,
    ) -> Option<Box<dyn ViewportObserver>>;
}

pub trait ViewportObserver {
    fn observe(&mut self, section: &SectionId);
    fn unobserve(&mut self, section: &SectionId);
    fn disconnect(&mut self) {}
}

/// Applies the presentation marker to a section.
///
/// Called while the controller's state is borrowed, so implementations must
/// not call back into the [`RevealController`].
pub trait SectionMarker {
    fn mark_revealed(&mut self, section: &SectionId);
}

struct RevealShared {
    threshold: f64,
    records: Vec<(SectionId, RevealState)>,
    marker: Box<dyn SectionMarker>,
    attached: bool,
}

impl RevealShared {
    /// Latch `section` to revealed. Returns true only on the first transition.
    fn reveal(&mut self, section: &SectionId) -> bool {
        let Some((_, state)) = self.records.iter_mut().find(|(id, _)| id == section) else {
            return false;
        };
        if *state == RevealState::Revealed {
            return false;
        }
        *state = RevealState::Revealed;
        self.marker.mark_revealed(section);
        true
    }

    fn apply(&mut self, entries: &[IntersectionEntry]) -> usize {
        if !self.attached {
            tracing::trace!(
                "Ignoring {} intersection entries after unsubscribe",
                entries.len()
            );
            return 0;
        }

        let mut newly_revealed = 0;
        for entry in entries {
            if entry.is_intersecting && entry.ratio >= self.threshold && self.reveal(&entry.target)
            {
                tracing::debug!(
                    "Section #{} revealed (ratio {:.2})",
                    entry.target,
                    entry.ratio
                );
                newly_revealed += 1;
            }
        }
        newly_revealed
    }
}

/// Shared handle to the per-section reveal state.
#[derive(Clone)]
pub struct RevealController {
    shared: Rc<RefCell<RevealShared>>,
}

impl RevealController {
    /// Start observing `sections`.
    ///
    /// The home section is revealed immediately. When `source` cannot
    /// provide an observer every section is revealed at once so content
    /// stays visible.
    pub fn attach(
        sections: impl IntoIterator<Item = SectionId>,
        marker: Box<dyn SectionMarker>,
        source: &dyn IntersectionSource,
        options: RevealOptions,
    ) -> Result<(Self, RevealSubscription), RevealError> {
        options.validate()?;

        let mut records: Vec<(SectionId, RevealState)> = Vec::new();
        for section in sections {
            if !records.iter().any(|(id, _)| *id == section) {
                records.push((section, RevealState::Hidden));
            }
        }
        let observed: Vec<SectionId> = records.iter().map(|(id, _)| id.clone()).collect();

        let shared = Rc::new(RefCell::new(RevealShared {
            threshold: options.threshold,
            records,
            marker,
            attached: true,
        }));
        shared.borrow_mut().reveal(&SectionId::home());

        // The callback only holds a weak handle; the subscription owns the observer
        let weak = Rc::downgrade(&shared);
        let on_entries: EntryCallback = Box::new(move |entries| {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().apply(&entries);
            }
        });

        let observer = match source.observer(options.threshold, on_entries) {
            Some(mut observer) => {
                for section in &observed {
                    observer.observe(section);
                }
                tracing::debug!(
                    "Observing {} sections at threshold {}",
                    observed.len(),
                    options.threshold
                );
                Some(observer)
            }
            None => {
                tracing::warn!(
                    "Viewport intersection unavailable, revealing all {} sections",
                    observed.len()
                );
                let mut state = shared.borrow_mut();
                for section in &observed {
                    state.reveal(section);
                }
                None
            }
        };

        let controller = Self { shared };
        let subscription = RevealSubscription {
            controller: controller.clone(),
            observer,
            sections: observed,
        };
        Ok((controller, subscription))
    }

    pub fn state(&self, section: &str) -> Option<RevealState> {
        self.shared
            .borrow()
            .records
            .iter()
            .find(|(id, _)| id.as_str() == section)
            .map(|(_, state)| *state)
    }

    pub fn is_revealed(&self, section: &str) -> bool {
        self.state(section) == Some(RevealState::Revealed)
    }

    /// Snapshot of revealed sections in observation order.
    pub fn revealed(&self) -> Vec<SectionId> {
        self.shared
            .borrow()
            .records
            .iter()
            .filter(|(_, state)| *state == RevealState::Revealed)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn sections(&self) -> Vec<SectionId> {
        self.shared
            .borrow()
            .records
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn threshold(&self) -> f64 {
        self.shared.borrow().threshold
    }

    /// False once the owning subscription has been released.
    pub fn is_attached(&self) -> bool {
        self.shared.borrow().attached
    }
}

/// Active observation of a set of sections. Released on drop.
pub struct RevealSubscription {
    controller: RevealController,
    observer: Option<Box<dyn ViewportObserver>>,
    sections: Vec<SectionId>,
}

impl RevealSubscription {
    /// Stop observing every section. Safe to call any number of times.
    pub fn unsubscribe(&mut self) {
        let was_attached =
            std::mem::replace(&mut self.controller.shared.borrow_mut().attached, false);

        if let Some(mut observer) = self.observer.take() {
            for section in &self.sections {
                observer.unobserve(section);
            }
            observer.disconnect();
        }

        if was_attached {
            tracing::debug!("Stopped observing {} sections", self.sections.len());
        }
    }

    pub fn is_active(&self) -> bool {
        self.controller.is_attached()
    }

    pub fn controller(&self) -> &RevealController {
        &self.controller
    }
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
