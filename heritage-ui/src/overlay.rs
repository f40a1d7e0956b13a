#![cfg(target_arch = "wasm32")]

//! Portuguese / Yoruba header caption rotation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use heritage_core::{HeritageConfig, Language, OverlayEvent, OverlayState, TimerCommand};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Window};

use crate::dom;

const OVERLAY_SELECTOR: &str = ".header-overlay";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

struct OverlayController {
    window: Window,
    portuguese: Element,
    yoruba: Element,
    state: OverlayState,
    interval_ms: i32,
    handle: Option<i32>,
    tick: Option<Closure<dyn FnMut()>>,
}

impl OverlayController {
    fn variant(&self, language: Language) -> &Element {
        match language {
            Language::Portuguese => &self.portuguese,
            Language::Yoruba => &self.yoruba,
        }
    }

    fn dispatch(&mut self, event: OverlayEvent) -> Result<(), JsValue> {
        let effect = self.state.handle(event);
        if let Some(language) = effect.show {
            self.show(language)?;
        }
        match effect.timer {
            TimerCommand::Schedule => self.schedule()?,
            TimerCommand::Cancel => self.cancel(),
            TimerCommand::Keep => {}
        }
        Ok(())
    }

    fn show(&self, visible: Language) -> Result<(), JsValue> {
        for language in Language::ALL {
            let el = self.variant(language);
            let is_visible = language == visible;
            el.class_list().toggle_with_force("visible", is_visible)?;
            el.set_attribute("aria-hidden", dom::bool_attr(!is_visible))?;
        }
        Ok(())
    }

    fn schedule(&mut self) -> Result<(), JsValue> {
        self.cancel();
        let Some(tick) = self.tick.as_ref() else {
            return Ok(());
        };
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                self.interval_ms,
            )?;
        self.handle = Some(handle);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn dispatch(controller: &Rc<RefCell<OverlayController>>, event: OverlayEvent) {
    dom::report(
        "overlay: update failed",
        controller.borrow_mut().dispatch(event),
    );
}

/// Attach the caption rotation. Returns `false` when the overlay is absent.
pub fn attach(
    window: &Window,
    document: &Document,
    config: &HeritageConfig,
) -> Result<bool, JsValue> {
    let Some(overlay) = document.query_selector(OVERLAY_SELECTOR)? else {
        return Ok(false);
    };
    let (Some(portuguese), Some(yoruba)) = (
        overlay.query_selector(&format!(".{}", Language::Portuguese.class_name()))?,
        overlay.query_selector(&format!(".{}", Language::Yoruba.class_name()))?,
    ) else {
        return Ok(false);
    };

    let reduced_motion = prefers_reduced_motion(window);
    let controller = Rc::new(RefCell::new(OverlayController {
        window: window.clone(),
        portuguese,
        yoruba,
        state: OverlayState::new(reduced_motion),
        interval_ms: dom::millis(config.overlay_interval()),
        handle: None,
        tick: None,
    }));

    let weak: Weak<RefCell<OverlayController>> = Rc::downgrade(&controller);
    let tick = Closure::<dyn FnMut()>::new(move || {
        if let Some(controller) = weak.upgrade() {
            dispatch(&controller, OverlayEvent::Tick);
        }
    });
    controller.borrow_mut().tick = Some(tick);

    controller.borrow_mut().dispatch(OverlayEvent::Init)?;

    {
        let controller = controller.clone();
        dom::listen(&overlay, "click", move |_| {
            dispatch(&controller, OverlayEvent::ManualToggle);
        })?;
    }
    {
        let controller = controller.clone();
        dom::listen(&overlay, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                dispatch(&controller, OverlayEvent::ManualToggle);
            }
        })?;
    }
    {
        let controller = controller.clone();
        dom::listen(&overlay, "mouseenter", move |_| {
            dispatch(&controller, OverlayEvent::PointerEnter);
        })?;
    }
    dom::listen(&overlay, "mouseleave", move |_| {
        dispatch(&controller, OverlayEvent::PointerLeave);
    })?;

    log::debug!("overlay attached (reduced motion: {reduced_motion})");
    Ok(true)
}
