//! "Is this element entirely on screen" check.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

/// Client-space edges of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Whether `edges` lie fully within a `width` x `height` viewport.
#[must_use]
pub fn fully_inside(edges: Edges, width: f64, height: f64) -> bool {
    edges.top >= 0.0 && edges.left >= 0.0 && edges.bottom <= height && edges.right <= width
}

/// Pick the window dimension, or the document element's when the window
/// reports nothing usable.
#[must_use]
pub fn pick_dimension(window_value: Option<f64>, document_value: f64) -> f64 {
    match window_value {
        Some(value) if value > 0.0 => value,
        _ => document_value,
    }
}

/// Whether `element` is entirely inside the current viewport.
#[must_use]
pub fn is_in_viewport(window: &Window, element: &Element) -> bool {
    let rect = element.get_bounding_client_rect();
    let edges = Edges { top: rect.top(), left: rect.left(), bottom: rect.bottom(), right: rect.right() };

    let root = window.document().and_then(|doc| doc.document_element());
    let (doc_width, doc_height) = root.map_or((0.0, 0.0), |el| (f64::from(el.client_width()), f64::from(el.client_height())));
    let width = pick_dimension(js_number(window.inner_width()), doc_width);
    let height = pick_dimension(js_number(window.inner_height()), doc_height);

    fully_inside(edges, width, height)
}

fn js_number(value: Result<JsValue, JsValue>) -> Option<f64> {
    match value {
        Ok(value) => value.as_f64(),
        Err(_) => None,
    }
}
