//! Framework-neutral WASM <-> JavaScript bridge for the heritage page rules.

use std::sync::OnceLock;

use heritage_core::{
    ContactError, ContactSubmission, HeritageConfig, HeritageConfigOverrides, HeritageError,
    PanelContent, TimelineData, TimelineItem,
};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Outcome of a simulated contact submission, as seen from JavaScript.
#[derive(Serialize)]
struct ContactOutcome {
    accepted: bool,
    notice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

/// The bundled table, parsed on first use.
pub fn bundled_timeline() -> Result<&'static TimelineData, &'static HeritageError> {
    static TIMELINE: OnceLock<Result<TimelineData, HeritageError>> = OnceLock::new();
    TIMELINE
        .get_or_init(heritage_data::default_timeline)
        .as_ref()
}

/// Detail panel text for a year, using the bundled table.
#[wasm_bindgen]
pub fn timeline_panel(year: &str, title: Option<String>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let data = bundled_timeline().map_err(|err| JsValue::from_str(&format_heritage_error(err)))?;
    let panel = PanelContent::for_item(&TimelineItem::new(year, title), data);

    to_value(&panel).map_err(|err| JsValue::from_str(&format!("Could not serialize panel: {err}")))
}

/// Years present in the bundled table, ascending.
#[wasm_bindgen]
pub fn timeline_years() -> Result<JsValue, JsValue> {
    let data = bundled_timeline().map_err(|err| JsValue::from_str(&format_heritage_error(err)))?;
    let years: Vec<&str> = data.years().collect();

    to_value(&years).map_err(|err| JsValue::from_str(&format!("Could not serialize years: {err}")))
}

/// Validate `{ name, email, message }` the way the contact form does.
#[wasm_bindgen]
pub fn validate_contact(submission: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let submission: ContactSubmission = from_value(submission)
        .map_err(|err| JsValue::from_str(&format!("Could not read submission: {err}")))?;

    let outcome = match submission.validate() {
        Ok(valid) => ContactOutcome {
            accepted: true,
            notice: valid.notice(),
            field: None,
        },
        Err(err) => ContactOutcome {
            accepted: false,
            notice: err.notice().to_string(),
            field: match err {
                ContactError::MissingField(field) => Some(field.to_string()),
                ContactError::InvalidEmail => Some("email".to_string()),
            },
        },
    };

    to_value(&outcome)
        .map_err(|err| JsValue::from_str(&format!("Could not serialize outcome: {err}")))
}

/// Merge a partial JS config object over the defaults.
#[wasm_bindgen]
pub fn resolve_config(config: Option<JsValue>) -> Result<JsValue, JsValue> {
    let cfg = match config {
        Some(js_cfg) => {
            let cfg: HeritageConfigOverrides = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            HeritageConfig::from(cfg)
        }
        None => HeritageConfig::default(),
    };

    to_value(&cfg).map_err(|err| JsValue::from_str(&format!("Could not serialize config: {err}")))
}

fn format_heritage_error(err: &HeritageError) -> String {
    format!("Heritage error: {err}")
}
