//! Error type for attaching controllers to the page.
//!
//! Event handlers never surface errors; only the attach paths do, so that
//! `start()` can log which controller failed and carry on with the rest.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom call failed: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a rejected DOM call.
    #[must_use]
    pub fn js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::js(&value)
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
