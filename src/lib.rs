//! Client-side behaviour for the portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the static page. It
//! attaches a handful of independent controllers once the document has been
//! parsed and exports a few utilities for the page to call. Every controller
//! keeps its decision logic in a pure function so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `#[wasm_bindgen]` entry points (`start`, `toggleTheme`, ...) |
//! | [`page`] | Attaches and detaches the controllers as a group |
//! | [`scroll_top`] | Floating back-to-top button |
//! | [`anchors`] | Smooth scrolling for same-page links |
//! | [`reveal`] | Fade-in of cards and badges as they enter the viewport |
//! | [`tilt`] | Pointer tilt on project cards |
//! | [`theme`] | Dark/light preference toggle and persistence |
//! | [`counter`] | Animated numeric counter |
//! | [`viewport`] | Fully-in-viewport test |
//! | [`config`] | Tunable values with JSON overrides |
//! | [`dom`] | Listener ownership and small `web-sys` helpers |
//! | [`error`] | Attach-time error type |
//! | [`consts`] | Selectors, class names, and numeric defaults |

pub mod anchors;
pub mod app;
pub mod config;
pub mod consts;
pub mod counter;
pub mod dom;
pub mod error;
pub mod page;
pub mod reveal;
pub mod scroll_top;
pub mod theme;
pub mod tilt;
pub mod viewport;

pub use error::Error;
