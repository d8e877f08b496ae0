//! WebAssembly bindings for gridspec
//!
//! Browser-friendly wrappers that exchange JSON strings with JavaScript.

use wasm_bindgen::prelude::*;

use crate::core::{format_definitions, DefinitionParser};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("warn"), None);
}

/// Parse a grid spec and return its definitions as a JSON array
#[wasm_bindgen]
pub fn parse_grid_spec(input: &str) -> Result<String, JsValue> {
    let definitions = DefinitionParser::new().parse(input);
    serde_json::to_string(&definitions).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a grid spec and return JSON with `definitions` and `diagnostics`
///
/// Diagnostics are human-readable messages, one per skipped entry or option.
#[wasm_bindgen]
pub fn validate_grid_spec(input: &str) -> String {
    let report = DefinitionParser::new().parse_with_diagnostics(input);
    let diagnostics: Vec<String> = report.diagnostics.iter().map(ToString::to_string).collect();

    serde_json::json!({
        "definitions": report.definitions,
        "diagnostics": diagnostics,
        "valid": diagnostics.is_empty(),
    })
    .to_string()
}

/// Normalize a grid spec to its canonical form
#[wasm_bindgen]
pub fn format_grid_spec(input: &str) -> String {
    format_definitions(&DefinitionParser::new().parse(input))
}
