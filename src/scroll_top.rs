//! Floating "back to top" button.
//!
//! The button is taken from the markup when present, otherwise created and
//! appended to `<body>`. Its visible class tracks the window's vertical scroll
//! offset; clicking it smooth-scrolls to the top of the page.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use web_sys::{Document, Element, Window};

use crate::config::Config;
use crate::consts::{
    SCROLL_TOP_CLASS, SCROLL_TOP_ICON_HTML, SCROLL_TOP_LABEL, SCROLL_TOP_SELECTOR, SCROLL_TOP_VISIBLE_CLASS,
};
use crate::dom::{self, Listener, Scroller};
use crate::error::Error;

/// Whether the button should be visible at vertical offset `offset`.
///
/// Strictly greater than the threshold; there is no hysteresis.
#[must_use]
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Vertical offset requested when the button is clicked.
pub const SCROLL_TOP_TARGET: f64 = 0.0;

/// Click handler body: scroll back to the top of the page.
pub fn handle_click<S: Scroller>(scroller: &S) {
    scroller.smooth_scroll_to(SCROLL_TOP_TARGET);
}

pub struct ScrollTopController {
    button: Element,
    listeners: Vec<Listener>,
}

impl ScrollTopController {
    /// Find or create the button and register the scroll and click handlers.
    ///
    /// # Errors
    ///
    /// Fails if the button cannot be created or a listener cannot be added.
    pub fn attach(window: &Window, document: &Document, config: &Config) -> Result<Self, Error> {
        let button = ensure_button(document)?;
        let threshold = config.scroll_threshold_px;

        let on_scroll = {
            let scroll_window = window.clone();
            let button = button.clone();
            Listener::new(window, "scroll", move |_event| match scroll_window.scroll_y() {
                Ok(offset) => dom::set_class(&button, SCROLL_TOP_VISIBLE_CLASS, scroll_top_visible(offset, threshold)),
                Err(err) => log::debug!("scrollY unavailable: {err:?}"),
            })?
        };

        let on_click = {
            let window = window.clone();
            Listener::new(&button, "click", move |_event| handle_click(&window))?
        };

        Ok(Self { button, listeners: vec![on_scroll, on_click] })
    }

    /// The button element this controller drives.
    #[must_use]
    pub fn button(&self) -> &Element {
        &self.button
    }

    /// Remove the handlers. The button stays in the document.
    pub fn detach(self) {
        drop(self.listeners);
    }
}

fn ensure_button(document: &Document) -> Result<Element, Error> {
    if let Some(existing) = document.query_selector(SCROLL_TOP_SELECTOR)? {
        return Ok(existing);
    }
    let body = document.body().ok_or(Error::NoBody)?;
    let button = document.create_element("button")?;
    button.set_class_name(SCROLL_TOP_CLASS);
    button.set_inner_html(SCROLL_TOP_ICON_HTML);
    button.set_attribute("aria-label", SCROLL_TOP_LABEL)?;
    body.append_child(&button)?;
    Ok(button)
}
