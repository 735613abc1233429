//! JavaScript entry points.
//!
//! `start` wires the page once the document has been parsed. The remaining
//! exports are utilities the page may call directly.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element};

use crate::config::Config;
use crate::consts::COUNTER_DEFAULT_DURATION_MS;
use crate::counter::{CounterHandle, start_counter};
use crate::dom;
use crate::error::Error;
use crate::page::Page;
use crate::theme;
use crate::viewport;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static CONFIG: RefCell<Config> = RefCell::new(Config::default());
}

/// Attach the page controllers, reading overrides from `<body data-folio-config>`.
///
/// # Errors
///
/// Fails only without a window or document.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    boot(None).map_err(JsValue::from)
}

/// Attach the page controllers with an explicit JSON config.
///
/// # Errors
///
/// Fails on malformed config or without a window or document.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = Config::from_json(json)?;
    boot(Some(config)).map_err(JsValue::from)
}

/// Detach every controller attached by `start`.
#[wasm_bindgen]
pub fn stop() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.detach();
        log::info!("portfolio detached");
    }
}

/// Flip between light and dark mode and persist the choice.
///
/// # Errors
///
/// Fails only without a window, document, or body.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    let window = dom::window()?;
    let key = CONFIG.with(|config| config.borrow().theme_key.clone());
    let theme = theme::page_preference(&window, &key)?.toggle();
    Ok(theme.as_str().to_owned())
}

/// Apply the persisted theme, if it is dark.
///
/// # Errors
///
/// Fails only without a window, document, or body.
#[wasm_bindgen(js_name = loadTheme)]
pub fn load_theme() -> Result<String, JsValue> {
    let window = dom::window()?;
    let key = CONFIG.with(|config| config.borrow().theme_key.clone());
    let theme = theme::page_preference(&window, &key)?.load();
    Ok(theme.as_str().to_owned())
}

/// Count `element`'s text from zero up to `target`.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(element: Element, target: f64, duration: Option<f64>) -> CounterHandle {
    start_counter(element, target, duration.unwrap_or(COUNTER_DEFAULT_DURATION_MS))
}

/// Whether `element` is entirely inside the viewport.
#[wasm_bindgen(js_name = isInViewport)]
pub fn is_in_viewport(element: &Element) -> bool {
    web_sys::window().is_some_and(|window| viewport::is_in_viewport(&window, element))
}

fn boot(config: Option<Config>) -> Result<(), Error> {
    install_logging();
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() != "loading" {
        mount(config);
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || mount(config));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

fn mount(config: Option<Config>) {
    let Ok(window) = dom::window() else {
        return;
    };
    let document = match dom::document(&window) {
        Ok(document) => document,
        Err(err) => {
            log::warn!("portfolio not started: {err}");
            return;
        }
    };
    let config = config.unwrap_or_else(|| Config::from_document(&document));

    stop();
    let page = Page::attach(&window, &document, &config);
    log::info!("portfolio ready ({} of 4 controllers)", page.active());
    CONFIG.with(|slot| *slot.borrow_mut() = config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

fn install_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}
