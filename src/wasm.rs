//! WASM bindings for browser-based story conversion.
//!
//! Each function takes text and returns text; the page calling them is
//! responsible for offering the result as a download.

use wasm_bindgen::prelude::*;

use crate::export::{HtmlExporter, JsonExporter};
use crate::import::{try_parse_json, try_parse_twine};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a Twine HTML export to a JSON backup.
#[wasm_bindgen]
pub fn twine_to_json(html: &str) -> Result<String, JsValue> {
    let story = try_parse_twine(html).map_err(to_js)?;
    JsonExporter::new().render(&story).map_err(to_js)
}

/// Convert a JSON backup to a playable HTML page.
#[wasm_bindgen]
pub fn json_to_html(json: &str) -> Result<String, JsValue> {
    let story = try_parse_json(json).map_err(to_js)?;
    HtmlExporter::new().render(&story).map_err(to_js)
}

/// Convert a Twine HTML export to a playable HTML page.
#[wasm_bindgen]
pub fn twine_to_html(html: &str) -> Result<String, JsValue> {
    let story = try_parse_twine(html).map_err(to_js)?;
    HtmlExporter::new().render(&story).map_err(to_js)
}

