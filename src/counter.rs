//! Animated numeric counter for statistics blocks.
//!
//! A repeating timer adds a fixed increment every tick and writes the floored
//! value into the element until the target is reached, then writes the exact
//! target and stops itself. The returned handle can stop it earlier.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::consts::COUNTER_TICK_MS;

/// What the element should show after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterFrame {
    /// Intermediate value, already floored.
    Show(f64),
    /// Final value; the timer should stop.
    Done(f64),
}

impl CounterFrame {
    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::Show(value) | Self::Done(value) => format!("{}", value + 0.0),
        }
    }

    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Pure stepping state for one counter run.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTicker {
    current: f64,
    target: f64,
    increment: f64,
}

impl CounterTicker {
    /// Count from zero to `target` over roughly `duration_ms`.
    #[must_use]
    pub fn new(target: f64, duration_ms: f64) -> Self {
        let ticks = duration_ms / f64::from(COUNTER_TICK_MS);
        Self { current: 0.0, target, increment: target / ticks }
    }

    /// Advance one tick.
    ///
    /// A degenerate increment (zero duration, non-finite input) finishes at once.
    pub fn step(&mut self) -> CounterFrame {
        if !self.increment.is_finite() {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current >= self.target {
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Show(self.current.floor())
        }
    }
}

/// Running counter animation.
#[wasm_bindgen]
pub struct CounterHandle {
    timer: Rc<RefCell<Option<Interval>>>,
}

#[wasm_bindgen]
impl CounterHandle {
    /// Stop the animation, leaving the last written value in place.
    pub fn cancel(&self) {
        self.timer.borrow_mut().take();
    }

    /// Whether the timer is still pending.
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

/// Start counting `element`'s text up to `target` over `duration_ms`.
pub fn start_counter(element: Element, target: f64, duration_ms: f64) -> CounterHandle {
    let timer = Rc::new(RefCell::new(None::<Interval>));
    let mut ticker = CounterTicker::new(target, duration_ms);

    let timer_for_tick = Rc::clone(&timer);
    let tick = Interval::new(COUNTER_TICK_MS, move || {
        let frame = ticker.step();
        element.set_text_content(Some(&frame.text()));
        if frame.is_done() {
            timer_for_tick.borrow_mut().take();
        }
    });
    *timer.borrow_mut() = Some(tick);
    CounterHandle { timer }
}
