//! Pointer-driven tilt on project cards.
//!
//! While the pointer moves over a card, the card rotates up to a few degrees
//! towards the pointer and lifts slightly. Leaving the card restores the
//! neutral transform. No state is kept between events.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::Config;
use crate::dom::{self, Listener};
use crate::error::Error;

/// Bounding rectangle of a card in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Rotation and lift applied to a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation about the horizontal axis, driven by vertical pointer offset.
    pub rotate_x_deg: f64,
    /// Rotation about the vertical axis, driven by horizontal pointer offset.
    pub rotate_y_deg: f64,
    /// Upward translation in pixels.
    pub lift_px: f64,
}

impl Tilt {
    /// No rotation, no lift.
    pub const NEUTRAL: Self = Self { rotate_x_deg: 0.0, rotate_y_deg: 0.0, lift_px: 0.0 };

    /// CSS `transform` value for this tilt.
    #[must_use]
    pub fn to_css(&self, perspective_px: f64) -> String {
        // Adding zero folds -0.0 into 0.0 so the neutral transform prints cleanly.
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            perspective_px,
            self.rotate_x_deg + 0.0,
            self.rotate_y_deg + 0.0,
            -self.lift_px + 0.0,
        )
    }
}

/// Offset of `pos` from the centre of a span starting at `start` of length `len`,
/// normalised to `[-1, 1]`.
fn normalized(pos: f64, start: f64, len: f64) -> f64 {
    if len <= 0.0 || !len.is_finite() {
        return 0.0;
    }
    let half = len / 2.0;
    ((pos - start - half) / half).clamp(-1.0, 1.0)
}

/// Tilt for a pointer at client position `(client_x, client_y)` over `rect`.
///
/// The vertical offset drives `rotateX` and the horizontal offset drives
/// `rotateY` with inverted sign, so the card leans towards the pointer.
#[must_use]
pub fn tilt_for_pointer(rect: Rect, client_x: f64, client_y: f64, max_deg: f64, lift_px: f64) -> Tilt {
    let px = normalized(client_x, rect.left, rect.width);
    let py = normalized(client_y, rect.top, rect.height);
    Tilt {
        rotate_x_deg: py * max_deg,
        rotate_y_deg: -px * max_deg,
        lift_px,
    }
}

pub struct CardTiltController {
    cards: Vec<HtmlElement>,
    listeners: Vec<Listener>,
}

impl CardTiltController {
    /// Register move/leave handlers on every card.
    ///
    /// # Errors
    ///
    /// Fails on an invalid selector or a rejected listener registration.
    pub fn attach(document: &Document, config: &Config) -> Result<Self, Error> {
        let cards = dom::select_all_html(document, &config.card_selector)?;
        let mut listeners = Vec::with_capacity(cards.len() * 2);
        for card in &cards {
            let max_deg = config.max_tilt_deg;
            let lift_px = config.lift_px;
            let perspective_px = config.perspective_px;

            let move_card = card.clone();
            listeners.push(Listener::new(card, "mousemove", move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let bounds = move_card.get_bounding_client_rect();
                let rect = Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height());
                let tilt = tilt_for_pointer(
                    rect,
                    f64::from(mouse.client_x()),
                    f64::from(mouse.client_y()),
                    max_deg,
                    lift_px,
                );
                set_transform(&move_card, &tilt.to_css(perspective_px));
            })?);

            let leave_card = card.clone();
            listeners.push(Listener::new(card, "mouseleave", move |_event| {
                set_transform(&leave_card, &Tilt::NEUTRAL.to_css(perspective_px));
            })?);
        }
        Ok(Self { cards, listeners })
    }

    /// Number of cards with tilt handlers.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Remove the handlers and clear any transform left on the cards.
    pub fn detach(self) {
        drop(self.listeners);
        for card in &self.cards {
            if let Err(err) = card.style().remove_property("transform") {
                log::debug!("failed to clear card transform: {err:?}");
            }
        }
    }
}

fn set_transform(card: &HtmlElement, css: &str) {
    if let Err(err) = card.style().set_property("transform", css) {
        log::debug!("failed to set card transform: {err:?}");
    }
}
