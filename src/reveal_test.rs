use std::cell::{Cell, RefCell};

use super::*;

/// Element double that records the calls `handle_entry` makes. The observer
/// only delivers notifications while `observed` is set.
struct FakeElement {
    classed: Cell<bool>,
    observed: Cell<bool>,
    calls: RefCell<Vec<RevealAction>>,
}

impl FakeElement {
    fn new(classed: bool) -> Self {
        Self { classed: Cell::new(classed), observed: Cell::new(true), calls: RefCell::new(Vec::new()) }
    }

    fn notify(&self, intersecting: bool) {
        if self.observed.get() {
            handle_entry(self, intersecting);
        }
    }

    fn class_writes(&self) -> usize {
        self.calls.borrow().iter().filter(|a| **a == RevealAction::AddClass).count()
    }
}

impl RevealTarget for FakeElement {
    fn is_revealed(&self) -> bool {
        self.classed.get()
    }

    fn add_reveal_class(&self) {
        self.classed.set(true);
        self.calls.borrow_mut().push(RevealAction::AddClass);
    }

    fn unobserve(&self) {
        self.observed.set(false);
        self.calls.borrow_mut().push(RevealAction::Unobserve);
    }
}

// --- reveal_actions ---

#[test]
fn intersecting_element_is_classed_then_unobserved() {
    assert_eq!(reveal_actions(true, false), vec![RevealAction::AddClass, RevealAction::Unobserve]);
}

#[test]
fn non_intersecting_element_is_left_alone() {
    assert!(reveal_actions(false, false).is_empty());
    assert!(reveal_actions(false, true).is_empty());
}

#[test]
fn intersecting_preclassed_element_is_still_unobserved() {
    assert_eq!(reveal_actions(true, true), vec![RevealAction::Unobserve]);
}

// --- handle_entry ---

#[test]
fn entry_applies_class_before_unobserving() {
    let el = FakeElement::new(false);
    handle_entry(&el, true);
    assert_eq!(*el.calls.borrow(), vec![RevealAction::AddClass, RevealAction::Unobserve]);
    assert!(el.classed.get());
    assert!(!el.observed.get());
}

#[test]
fn preclassed_element_in_markup_is_unwatched_on_first_intersection() {
    let el = FakeElement::new(true);
    el.notify(true);
    assert!(!el.observed.get());
    assert_eq!(el.class_writes(), 0);
}

#[test]
fn reentering_viewport_reveals_only_once() {
    let el = FakeElement::new(false);
    for intersecting in [false, true, false, true, true, false, true] {
        el.notify(intersecting);
    }
    assert_eq!(el.class_writes(), 1);
    assert_eq!(*el.calls.borrow(), vec![RevealAction::AddClass, RevealAction::Unobserve]);
}

#[test]
fn element_never_in_view_stays_observed() {
    let el = FakeElement::new(false);
    for _ in 0..10 {
        el.notify(false);
    }
    assert!(el.observed.get());
    assert!(el.calls.borrow().is_empty());
}

#[test]
fn batch_reveals_each_element_independently() {
    let els: Vec<FakeElement> = (0..4).map(|_| FakeElement::new(false)).collect();
    let batches = [[true, false, false, true], [true, true, false, true], [false, true, false, false]];
    for batch in batches {
        for (el, intersecting) in els.iter().zip(batch) {
            el.notify(intersecting);
        }
    }
    let writes: Vec<usize> = els.iter().map(FakeElement::class_writes).collect();
    assert_eq!(writes, vec![1, 1, 0, 1]);
    let observed: Vec<bool> = els.iter().map(|el| el.observed.get()).collect();
    assert_eq!(observed, vec![false, false, true, false]);
}
