#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Write the current year into `#year`, if the footer has one.
pub fn attach(document: &Document) -> Result<bool, JsValue> {
    let Some(el) = document.get_element_by_id("year") else {
        return Ok(false);
    };
    el.set_text_content(Some(&heritage_core::current_year().to_string()));
    Ok(true)
}
