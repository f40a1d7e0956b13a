#![cfg(target_arch = "wasm32")]

//! Timeline carousel controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use heritage_core::{
    centered_scroll_left, nav_alignment_target, HeritageConfig, NavKey, TimelineData,
    TimelineItem, TimelineState, TrackMetrics,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};

use crate::dom;

const TRACK_SELECTOR: &str = ".timeline-track";
const ITEM_SELECTOR: &str = ".timeline-item";
const PANEL_TITLE_ID: &str = "timeline-title";
const PANEL_DESC_ID: &str = "timeline-desc";

struct TimelineController {
    track: HtmlElement,
    items: Vec<HtmlElement>,
    panel_title: Element,
    panel_desc: Element,
    state: TimelineState,
    data: TimelineData,
    nav_alignment_delay: Duration,
}

impl TimelineController {
    fn index_of(&self, element: &Element) -> Option<usize> {
        self.items
            .iter()
            .position(|item| dom::same_node(item, element))
    }

    fn activate(&mut self, index: usize) -> Result<(), JsValue> {
        let Some(panel) = self.state.activate(index, &self.data) else {
            return Ok(());
        };

        self.panel_title.set_text_content(Some(&panel.title));
        self.panel_desc.set_text_content(Some(&panel.description));

        for (idx, item) in self.items.iter().enumerate() {
            let is_active = self.state.is_active(idx);
            item.class_list().toggle_with_force("active", is_active)?;
            item.set_attribute("aria-pressed", dom::bool_attr(is_active))?;
            item.set_attribute("aria-selected", dom::bool_attr(is_active))?;
        }

        self.center(index);
        dom::set_timeout(self.nav_alignment_delay, || {
            dom::report("timeline: nav alignment failed", align_main_below_nav());
        })?;
        Ok(())
    }

    fn center(&self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let metrics = TrackMetrics {
            item_offset_left: f64::from(item.offset_left()),
            item_width: item.get_bounding_client_rect().width(),
            track_width: self.track.get_bounding_client_rect().width(),
            scroll_width: f64::from(self.track.scroll_width()),
            client_width: f64::from(self.track.client_width()),
        };

        let options = ScrollToOptions::new();
        options.set_left(centered_scroll_left(metrics));
        options.set_behavior(ScrollBehavior::Smooth);
        self.track.scroll_to_with_scroll_to_options(&options);
    }
}

/// Keep `#main` from sitting under the fixed `nav` after the track scrolls.
fn align_main_below_nav() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;

    let Some(nav) = document
        .query_selector("nav")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let Some(main) = dom::element_by_id::<HtmlElement>(&document, "main") else {
        return Ok(());
    };

    let target = nav_alignment_target(
        window.scroll_y()?,
        f64::from(nav.offset_height()),
        f64::from(main.offset_top()),
    );
    if let Some(top) = target {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    Ok(())
}

fn read_items(track: &Element) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = track.query_selector_all(ITEM_SELECTOR)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Attach the carousel behavior. Returns `false` when the page has no timeline.
pub fn attach(
    document: &Document,
    data: TimelineData,
    config: &HeritageConfig,
) -> Result<bool, JsValue> {
    let Some(track) = document
        .query_selector(TRACK_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };
    let elements = read_items(&track)?;
    let (Some(panel_title), Some(panel_desc)) = (
        document.get_element_by_id(PANEL_TITLE_ID),
        document.get_element_by_id(PANEL_DESC_ID),
    ) else {
        return Ok(false);
    };

    let items = elements
        .iter()
        .map(|el| {
            TimelineItem::new(
                el.get_attribute("data-year").unwrap_or_default(),
                el.get_attribute("data-title"),
            )
        })
        .collect();
    let Some(state) = TimelineState::new(items) else {
        return Ok(false);
    };

    let controller = Rc::new(RefCell::new(TimelineController {
        track: track.clone(),
        items: elements.clone(),
        panel_title,
        panel_desc,
        state,
        data,
        nav_alignment_delay: config.nav_alignment_delay(),
    }));

    for (index, item) in elements.iter().enumerate() {
        let controller = controller.clone();
        let target = item.clone();
        dom::listen(item, "click", move |event| {
            event.prevent_default();
            dom::report("timeline: focus failed", dom::focus_without_scroll(&target));
            dom::report(
                "timeline: activation failed",
                controller.borrow_mut().activate(index),
            );
        })?;
    }

    {
        let controller = controller.clone();
        let document = document.clone();
        dom::listen(&track, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(key) = NavKey::from_key(&event.key()) else {
                return;
            };
            let mut ctl = controller.borrow_mut();
            let focused = document
                .active_element()
                .and_then(|active| ctl.index_of(&active));
            let Some(target) = ctl.state.key_target(focused, key) else {
                return;
            };

            event.prevent_default();
            if key.moves_focus() {
                dom::report(
                    "timeline: focus failed",
                    dom::focus_without_scroll(&ctl.items[target]),
                );
            }
            dom::report("timeline: activation failed", ctl.activate(target));
        })?;
    }

    dom::set_timeout(config.initial_activation_delay(), move || {
        dom::report(
            "timeline: initial activation failed",
            controller.borrow_mut().activate(0),
        );
    })?;

    log::debug!("timeline attached with {} items", elements.len());
    Ok(true)
}
