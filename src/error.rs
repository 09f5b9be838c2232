//! Errors raised at the edges of the effects layer
//!
//! None of these reach the page: the runtime logs them and carries on.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("no browser window or document")]
    NoWindow,

    #[error("document has no {0}")]
    MissingNode(&'static str),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("unknown season `{0}`")]
    UnknownSeason(String),
}

impl From<JsValue> for GardenError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
