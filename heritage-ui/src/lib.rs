//! DOM controllers for the heritage page, attached when the WASM module starts.
//!
//! Each controller looks up its own elements and quietly stays detached when
//! the markup does not contain them.

#[cfg(target_arch = "wasm32")]
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod footer;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod menu;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod timeline;

use heritage_core::{HeritageConfig, HeritageConfigOverrides};

/// Attribute on `<body>` holding optional JSON timing overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-heritage-config";

/// Resolve the page configuration from the raw attribute value.
///
/// Malformed JSON is logged and ignored.
pub fn config_from_attribute(raw: Option<&str>) -> HeritageConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return HeritageConfig::default();
    };
    match serde_json::from_str::<HeritageConfigOverrides>(raw) {
        Ok(overrides) => HeritageConfig::from(overrides),
        Err(err) => {
            log::warn!("ignoring invalid {CONFIG_ATTRIBUTE}: {err}");
            HeritageConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_start {
    use heritage_core::HeritageConfig;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Window};

    use crate::{config_from_attribute, contact, dom, footer, logger, menu, overlay, timeline};
    use crate::CONFIG_ATTRIBUTE;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init();

        let document = dom::document()?;
        if document.ready_state() == "loading" {
            dom::listen(&document, "DOMContentLoaded", |_| {
                if let Err(err) = mount_page() {
                    console::error_1(&err);
                }
            })?;
            return Ok(());
        }
        mount_page()
    }

    /// Attach every controller whose elements exist on the page.
    pub fn mount_page() -> Result<(), JsValue> {
        let window: Window = dom::window()?;
        let document: Document = dom::document()?;

        let raw = document
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        let config: HeritageConfig = config_from_attribute(raw.as_deref());

        footer::attach(&document)?;

        match heritage_data::default_timeline() {
            Ok(data) => {
                if !timeline::attach(&document, data, &config)? {
                    log::debug!("no timeline on this page");
                }
            }
            Err(err) => log::error!("timeline table unusable: {err}"),
        }

        if !overlay::attach(&window, &document, &config)? {
            log::debug!("no language overlay on this page");
        }
        if !contact::attach(&window, &document)? {
            log::debug!("no contact form on this page");
        }
        if !menu::attach(&document)? {
            log::debug!("no dropdown menu on this page");
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_start::mount_page;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_page() -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "heritage-ui only supports the wasm32 target",
    ))
}
