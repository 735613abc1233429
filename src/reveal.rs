//! Scroll-triggered fade-in for cards and badges.
//!
//! One shared `IntersectionObserver` watches every matching element. The
//! first time an element intersects it gets the reveal class and is
//! unobserved, so the transition fires at most once per element. Elements
//! that never come into view stay observed for the life of the page.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::Config;
use crate::consts::REVEAL_CLASS;
use crate::dom;
use crate::error::Error;

/// Effect of one intersection notification on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Apply the reveal class.
    AddClass,
    /// Stop watching the element.
    Unobserve,
}

/// Actions for an element given the latest notification.
///
/// Every intersecting element is unobserved; the class write is skipped when
/// the element already carries it.
#[must_use]
pub fn reveal_actions(intersecting: bool, already_revealed: bool) -> Vec<RevealAction> {
    if !intersecting {
        return Vec::new();
    }
    if already_revealed {
        vec![RevealAction::Unobserve]
    } else {
        vec![RevealAction::AddClass, RevealAction::Unobserve]
    }
}

/// An element as seen from the observer callback.
pub trait RevealTarget {
    fn is_revealed(&self) -> bool;
    fn add_reveal_class(&self);
    fn unobserve(&self);
}

/// Apply one notification entry to `target`.
pub fn handle_entry<T: RevealTarget>(target: &T, intersecting: bool) {
    for action in reveal_actions(intersecting, target.is_revealed()) {
        match action {
            RevealAction::AddClass => target.add_reveal_class(),
            RevealAction::Unobserve => target.unobserve(),
        }
    }
}

/// A live element paired with the observer watching it.
struct ObservedElement<'a> {
    element: Element,
    observer: &'a IntersectionObserver,
}

impl RevealTarget for ObservedElement<'_> {
    fn is_revealed(&self) -> bool {
        self.element.class_list().contains(REVEAL_CLASS)
    }

    fn add_reveal_class(&self) {
        dom::set_class(&self.element, REVEAL_CLASS, true);
    }

    fn unobserve(&self) {
        self.observer.unobserve(&self.element);
    }
}

pub struct VisibilityAnimator {
    observer: IntersectionObserver,
    registered: usize,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityAnimator {
    /// Build the observer and start watching every element matching the reveal selector.
    ///
    /// # Errors
    ///
    /// Fails if the observer cannot be constructed or the selector is invalid.
    pub fn attach(document: &Document, config: &Config) -> Result<Self, Error> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = ObservedElement { element: entry.target(), observer: &observer };
                handle_entry(&target, entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let elements = dom::select_all(document, &config.reveal_selector)?;
        for el in &elements {
            observer.observe(el);
        }
        log::debug!("reveal observer registered {} elements", elements.len());

        Ok(Self { observer, registered: elements.len(), _callback: callback })
    }

    /// Number of elements passed to `observe` at attach time.
    ///
    /// Not decremented as elements are revealed and unobserved.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.registered
    }

    /// Stop all observation.
    pub fn detach(self) {
        self.observer.disconnect();
    }
}
