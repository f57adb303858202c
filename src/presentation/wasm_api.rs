use gloo::utils::format::JsValueSerdeExt;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::domain::insights::payload_to_sections;
use crate::infrastructure::markdown::render_markdown;

/// Run the payload formatter from JavaScript: takes a response body as a
/// JSON string, returns an array of `{title, content}` sections.
#[wasm_bindgen]
pub fn format_payload(payload_json: &str) -> Result<JsValue, JsValue> {
    let payload: Value = serde_json::from_str(payload_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid JSON payload: {e}")))?;
    let sections = payload_to_sections(&payload);
    JsValue::from_serde(&sections)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert sections: {e}")))
}

/// Render one section's content to HTML through the same markdown pipeline
/// the report view uses.
#[wasm_bindgen]
pub fn render_section_html(content: &str) -> String {
    render_markdown(content)
}
