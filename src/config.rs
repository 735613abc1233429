//! Tunable values for the page controllers.
//!
//! Every field has a default matching the stylesheet and markup the script
//! was written for. A page can override any subset by passing JSON to
//! `start_with_config` or by placing it in the `data-folio-config` attribute
//! on `<body>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use web_sys::Document;

use crate::consts;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub scroll_threshold_px: f64,
    pub nav_offset_px: f64,
    pub anchor_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_selector: String,
    pub card_selector: String,
    pub max_tilt_deg: f64,
    pub lift_px: f64,
    pub perspective_px: f64,
    pub theme_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_threshold_px: consts::SCROLL_TOP_THRESHOLD_PX,
            nav_offset_px: consts::NAV_OFFSET_PX,
            anchor_selector: consts::ANCHOR_SELECTOR.to_owned(),
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            reveal_selector: consts::REVEAL_SELECTOR.to_owned(),
            card_selector: consts::CARD_SELECTOR.to_owned(),
            max_tilt_deg: consts::MAX_TILT_DEG,
            lift_px: consts::TILT_LIFT_PX,
            perspective_px: consts::TILT_PERSPECTIVE_PX,
            theme_key: consts::THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON or unknown keys.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the override attribute from `<body>`, falling back to defaults.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .body()
            .and_then(|body| body.get_attribute(consts::CONFIG_ATTRIBUTE))
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {}: {err}", consts::CONFIG_ATTRIBUTE);
                Self::default()
            }
        }
    }
}
