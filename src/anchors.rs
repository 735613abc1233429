//! Smooth scrolling for same-page fragment links.
//!
//! Clicks on `a[href^="#"]` are intercepted and turned into an animated
//! scroll to the target element, leaving room for the fixed navigation bar.
//! A bare `#` (or empty href) keeps the browser default. A fragment naming an
//! element that does not exist swallows the click without scrolling.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::Config;
use crate::dom::{self, Listener, Scroller};
use crate::error::Error;

/// What a click on a fragment link should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorClick {
    /// Suppress the browser's own navigation.
    pub prevent_default: bool,
    /// Vertical offset to smooth-scroll to, if any.
    pub scroll_to: Option<f64>,
}

impl AnchorClick {
    /// Let the browser handle the click.
    pub const PASS_THROUGH: Self = Self { prevent_default: false, scroll_to: None };
}

/// Decide how to handle a click on a link with the given `href`.
///
/// `offset_top_of` resolves an element id to its `offsetTop`, or `None` when
/// no such element exists.
pub fn resolve_anchor_click<F>(href: &str, offset_top_of: F, nav_offset: f64) -> AnchorClick
where
    F: FnOnce(&str) -> Option<f64>,
{
    if href.is_empty() || href == "#" {
        return AnchorClick::PASS_THROUGH;
    }
    let target_id = href.strip_prefix('#').unwrap_or(href);
    AnchorClick {
        prevent_default: true,
        scroll_to: offset_top_of(target_id).map(|top| top - nav_offset),
    }
}

/// Click handler body: decide, then request the scroll if there is one.
///
/// Returns whether the browser's default navigation must be suppressed.
pub fn handle_anchor_click<F, S>(href: &str, offset_top_of: F, nav_offset: f64, scroller: &S) -> bool
where
    F: FnOnce(&str) -> Option<f64>,
    S: Scroller,
{
    let click = resolve_anchor_click(href, offset_top_of, nav_offset);
    if let Some(top) = click.scroll_to {
        scroller.smooth_scroll_to(top);
    }
    click.prevent_default
}

pub struct SmoothAnchorNavigator {
    listeners: Vec<Listener>,
}

impl SmoothAnchorNavigator {
    /// Register a click handler on every same-page link currently in the document.
    ///
    /// # Errors
    ///
    /// Fails on an invalid selector or a rejected listener registration.
    pub fn attach(window: &Window, document: &Document, config: &Config) -> Result<Self, Error> {
        let links = dom::select_all(document, &config.anchor_selector)?;
        let mut listeners = Vec::with_capacity(links.len());
        for link in links {
            let window = window.clone();
            let document = document.clone();
            let nav_offset = config.nav_offset_px;
            let handler_link = link.clone();
            listeners.push(Listener::new(&link, "click", move |event| {
                let href = handler_link.get_attribute("href").unwrap_or_default();
                if handle_anchor_click(&href, |id| offset_top_of(&document, id), nav_offset, &window) {
                    event.prevent_default();
                }
            })?);
        }
        log::debug!("anchor navigation attached to {} links", listeners.len());
        Ok(Self { listeners })
    }

    /// Number of links with an active handler.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove every click handler.
    pub fn detach(self) {
        drop(self.listeners);
    }
}

fn offset_top_of(document: &Document, id: &str) -> Option<f64> {
    let el = document.get_element_by_id(id)?;
    let html = el.dyn_ref::<HtmlElement>()?;
    Some(f64::from(html.offset_top()))
}
