//! Shared utilities for the web crate

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Error for a missing piece of the host page
pub(crate) fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("[cwm-web] {} not found", what))
}
