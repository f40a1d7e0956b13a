//! Year → text table for the heritage timeline, shipped as embedded JSON.

use std::collections::BTreeMap;

use heritage_core::{HeritageError, TimelineData};
use serde_json::Value;

/// The table bundled with the page, keyed by four-digit year.
pub const EMBEDDED_TIMELINE: &str = include_str!("../data/timeline.json");

/// Parse a timeline table from a JSON string.
pub fn load_timeline_str(json: &str) -> Result<TimelineData, HeritageError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| HeritageError::Parse(err.to_string()))?;
    load_timeline_value(&value)
}

/// Parse a timeline table from a `serde_json::Value`.
///
/// The value must be an object whose keys are years and whose values are
/// non-blank strings.
pub fn load_timeline_value(value: &Value) -> Result<TimelineData, HeritageError> {
    let object = value.as_object().ok_or(HeritageError::MissingData)?;

    let mut entries = BTreeMap::new();
    for (year, text) in object {
        let text = text.as_str().ok_or_else(|| {
            HeritageError::Parse(format!("entry for {year} is not a string"))
        })?;
        entries.insert(year.clone(), text.to_string());
    }

    let data = TimelineData::new(entries)?;
    log::debug!("loaded timeline table with {} years", data.len());
    Ok(data)
}

/// The bundled table.
pub fn default_timeline() -> Result<TimelineData, HeritageError> {
    load_timeline_str(EMBEDDED_TIMELINE)
}
