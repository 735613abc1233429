//! The set of controllers attached to one page.
//!
//! Each controller attaches independently. A controller that fails to attach
//! is logged and left out; the others still run.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use web_sys::{Document, Window};

use crate::anchors::SmoothAnchorNavigator;
use crate::config::Config;
use crate::error::Error;
use crate::reveal::VisibilityAnimator;
use crate::scroll_top::ScrollTopController;
use crate::tilt::CardTiltController;

pub struct Page {
    scroll_top: Option<ScrollTopController>,
    anchors: Option<SmoothAnchorNavigator>,
    reveal: Option<VisibilityAnimator>,
    tilt: Option<CardTiltController>,
}

impl Page {
    /// Attach every controller to `document`.
    #[must_use]
    pub fn attach(window: &Window, document: &Document, config: &Config) -> Self {
        let page = Self {
            scroll_top: attached("scroll-to-top", ScrollTopController::attach(window, document, config)),
            anchors: attached("anchor navigation", SmoothAnchorNavigator::attach(window, document, config)),
            reveal: attached("reveal animation", VisibilityAnimator::attach(document, config)),
            tilt: attached("card tilt", CardTiltController::attach(document, config)),
        };
        log::debug!(
            "page attached: {} links, {} revealable, {} cards",
            page.anchors.as_ref().map_or(0, SmoothAnchorNavigator::link_count),
            page.reveal.as_ref().map_or(0, VisibilityAnimator::registered),
            page.tilt.as_ref().map_or(0, CardTiltController::card_count),
        );
        page
    }

    /// Number of controllers that attached successfully.
    #[must_use]
    pub fn active(&self) -> usize {
        usize::from(self.scroll_top.is_some())
            + usize::from(self.anchors.is_some())
            + usize::from(self.reveal.is_some())
            + usize::from(self.tilt.is_some())
    }

    /// Detach every controller.
    pub fn detach(self) {
        if let Some(scroll_top) = self.scroll_top {
            scroll_top.detach();
        }
        if let Some(anchors) = self.anchors {
            anchors.detach();
        }
        if let Some(reveal) = self.reveal {
            reveal.detach();
        }
        if let Some(tilt) = self.tilt {
            tilt.detach();
        }
    }
}

/// Keep a successfully attached controller, logging the failure otherwise.
pub(crate) fn attached<T>(name: &str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(controller) => Some(controller),
        Err(err) => {
            log::warn!("{name} not attached: {err}");
            None
        }
    }
}
