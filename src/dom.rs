//! Thin helpers over `web-sys` shared by the controllers.
//!
//! [`Listener`] ties an event callback to the target it was registered on and
//! unregisters it when dropped, which is what gives each controller its
//! `detach` step.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::Error;

/// An event listener that is removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Js`] if the browser rejects the registration.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, Error>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

/// The global window.
///
/// # Errors
///
/// Returns [`Error::NoWindow`] outside a browser.
pub fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`Error::NoDocument`] when the window has none.
pub fn document(window: &Window) -> Result<Document, Error> {
    window.document().ok_or(Error::NoDocument)
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`Error::Js`] for an invalid selector.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, Error> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for idx in 0..nodes.length() {
        if let Some(node) = nodes.item(idx)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    Ok(out)
}

/// Like [`select_all`], keeping only `HtmlElement`s.
///
/// # Errors
///
/// Returns [`Error::Js`] for an invalid selector.
pub fn select_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, Error> {
    Ok(select_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect())
}

/// Something that can be asked for an animated vertical scroll.
pub trait Scroller {
    fn smooth_scroll_to(&self, top: f64);
}

impl Scroller for Window {
    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_to_with_scroll_to_options(&options);
    }
}

/// Add or remove `class` on `el` so that its presence equals `present`.
pub fn set_class(el: &Element, class: &str, present: bool) {
    let classes = el.class_list();
    let result = if present { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::debug!("failed to update class {class}: {err:?}");
    }
}
