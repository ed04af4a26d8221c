//! Reveal-on-scroll wiring for the page sections.
//!
//! The revealed set lives in a signal so section components render the
//! `visible` class from it. On the client, a [`RevealController`] is attached
//! after mount against the `<section>` elements actually in the document and
//! released when the root unmounts.

use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::view_state::reveal::REVEALED_CLASS;
use crate::view_state::{SectionId, SectionMarker};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::view_state::{RevealController, RevealOptions, RevealSubscription};

/// Revealed sections shared via context
#[derive(Clone, Copy)]
pub struct RevealContext {
    revealed: Signal<BTreeSet<SectionId>>,
}

impl RevealContext {
    pub fn is_revealed(&self, section: &str) -> bool {
        self.revealed.read().iter().any(|id| id.as_str() == section)
    }

    /// `base` classes plus the reveal marker once the section has been seen.
    pub fn class_for(&self, section: &str, base: &str) -> String {
        section_class(base, self.is_revealed(section))
    }
}

pub fn section_class(base: &str, revealed: bool) -> String {
    match (base.is_empty(), revealed) {
        (true, true) => REVEALED_CLASS.to_string(),
        (false, true) => format!("{base} {REVEALED_CLASS}"),
        (_, false) => base.to_string(),
    }
}

/// Marker that records reveals in the context signal.
#[derive(Clone, Copy)]
pub struct SignalMarker {
    revealed: Signal<BTreeSet<SectionId>>,
}

impl SectionMarker for SignalMarker {
    fn mark_revealed(&mut self, section: &SectionId) {
        self.revealed.write().insert(section.clone());
    }
}

/// Initialize reveal context - call once at app root.
///
/// Server and first client render agree on the initial state: only the home
/// section is revealed.
pub fn use_reveal_provider() -> RevealContext {
    let revealed = use_signal(|| BTreeSet::from([SectionId::home()]));
    let ctx = use_context_provider(|| RevealContext { revealed });

    // Client-side only: observe the mounted sections
    #[cfg(target_arch = "wasm32")]
    {
        // Holds the subscription across renders; released on unmount
        let guard: Rc<RefCell<Option<RevealSubscription>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let on_mount = guard.clone();
        use_effect(move || {
            if on_mount.borrow().is_some() {
                return;
            }

            let sections = dom::mounted_sections();
            match RevealController::attach(
                sections,
                Box::new(SignalMarker { revealed }),
                &dom::DomIntersectionSource,
                RevealOptions::default(),
            ) {
                Ok((_, subscription)) => *on_mount.borrow_mut() = Some(subscription),
                Err(e) => tracing::error!("Failed to attach reveal-on-scroll: {}", e),
            }
        });

        use_drop(move || {
            if let Some(mut subscription) = guard.borrow_mut().take() {
                subscription.unsubscribe();
            }
        });
    }

    ctx
}

/// Get reveal context - use in section components
pub fn use_reveal() -> RevealContext {
    use_context::<RevealContext>()
}

// ============ WASM-only DOM bindings ============

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::view_state::{
        EntryCallback, IntersectionEntry, IntersectionSource, SectionId, ViewportObserver,
    };

    /// Ids of the `<section>` elements present in the document right now.
    pub fn mounted_sections() -> Vec<SectionId> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Vec::new();
        };

        let nodes = match document.query_selector_all("section") {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!("Failed to query sections: {:?}", e);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|element| element.id())
            .filter(|id| !id.is_empty())
            .map(SectionId::from)
            .collect()
    }

    /// `IntersectionObserver`-backed source.
    pub struct DomIntersectionSource;

    impl IntersectionSource for DomIntersectionSource {
        fn observer(
            &self,
            threshold: f64,
            mut on_entries: EntryCallback,
        ) -> Option<Box<dyn ViewportObserver>> {
            let document = web_sys::window()?.document()?;

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
                    let batch = entries
                        .iter()
                        .filter_map(|value| value.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                        .map(|entry| {
                            IntersectionEntry::new(
                                entry.target().id(),
                                entry.is_intersecting(),
                                entry.intersection_ratio(),
                            )
                        })
                        .collect();
                    on_entries(batch);
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => Some(Box::new(DomViewportObserver {
                    observer,
                    document,
                    _callback: callback,
                })),
                Err(e) => {
                    tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                    None
                }
            }
        }
    }

    /// Owns the JS observer and its closure; both go away with the subscription.
    struct DomViewportObserver {
        observer: web_sys::IntersectionObserver,
        document: web_sys::Document,
        _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    }

    impl DomViewportObserver {
        fn element(&self, section: &SectionId) -> Option<web_sys::Element> {
            let element = self.document.get_element_by_id(section.as_str());
            if element.is_none() {
                tracing::debug!("Section #{} is not in the document", section);
            }
            element
        }
    }

    impl ViewportObserver for DomViewportObserver {
        fn observe(&mut self, section: &SectionId) {
            if let Some(element) = self.element(section) {
                self.observer.observe(&element);
            }
        }

        fn unobserve(&mut self, section: &SectionId) {
            if let Some(element) = self.element(section) {
                self.observer.unobserve(&element);
            }
        }

        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_class() {
        assert_eq!(section_class("hero", true), "hero visible");
        assert_eq!(section_class("hero", false), "hero");
        assert_eq!(section_class("", true), "visible");
        assert_eq!(section_class("", false), "");
    }
}
