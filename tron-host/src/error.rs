//! Host error type.
//!
//! Everything that can go wrong while wiring the page lands here. The
//! exported `run` converts it into a `JsValue`, so failures reach the page as
//! a rejected promise.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a <canvas>")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("module export `{0}` is missing or not a function")]
    MissingExport(String),
    #[error("game module not instantiated yet")]
    NotReady,
    #[error("game module already attached")]
    AlreadyAttached,
    #[error("invalid host config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
