//! WASM bindings for rison-core.
//!
//! Exposes `encode`, `encodeUri` and `urlEncode` as `#[wasm_bindgen]`
//! functions callable from JavaScript/TypeScript. Values cross the boundary
//! as JSON text so the JS side can hand over `JSON.stringify(obj)` directly.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p rison-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/rison_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Encode a JSON string as RISON.
///
/// Returns the RISON string, or throws a JS error if the input is not valid JSON.
#[wasm_bindgen]
pub fn encode(json: &str) -> std::result::Result<String, JsValue> {
    rison_core::encode_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JSON string as RISON, percent-encoded for a URI query component.
#[wasm_bindgen(js_name = encodeUri)]
pub fn encode_uri(json: &str) -> std::result::Result<String, JsValue> {
    rison_core::encode_json_with(json, &rison_core::EncodeOptions::uri())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Percent-encode text with the RISON safe set.
#[wasm_bindgen(js_name = urlEncode)]
pub fn url_encode(input: &str) -> String {
    rison_core::url_encode(input)
}
