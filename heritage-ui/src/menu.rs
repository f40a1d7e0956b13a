#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use heritage_core::{MenuEvent, MenuState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusEvent, KeyboardEvent, Node};

use crate::dom;

const TRIGGER_ID: &str = "games-button";
const MENU_ID: &str = "games-menu";

struct MenuController {
    trigger: Element,
    menu: Element,
    state: MenuState,
}

impl MenuController {
    fn sync(&self) -> Result<(), JsValue> {
        self.trigger
            .set_attribute("aria-expanded", self.state.aria_expanded())?;
        self.menu
            .set_attribute("aria-hidden", self.state.aria_hidden())?;
        Ok(())
    }

    /// Apply an event; returns whether the key's default must be suppressed.
    fn dispatch(&mut self, event: MenuEvent) -> Result<bool, JsValue> {
        let effect = self.state.handle(event);
        if effect.changed {
            self.sync()?;
        }
        Ok(effect.prevent_default)
    }

    /// Whether `target` lies outside both the menu and its trigger.
    fn is_outside(&self, target: Option<&Node>) -> bool {
        let on_trigger = target.is_some_and(|node| self.trigger.is_same_node(Some(node)));
        !on_trigger && !dom::contains(&self.menu, target)
    }
}

fn event_node(target: Option<web_sys::EventTarget>) -> Option<Node> {
    target.and_then(|t| t.dyn_into::<Node>().ok())
}

/// Attach the dropdown toggle. Returns `false` when trigger or menu is absent.
pub fn attach(document: &Document) -> Result<bool, JsValue> {
    let (Some(trigger), Some(menu)) = (
        document.get_element_by_id(TRIGGER_ID),
        document.get_element_by_id(MENU_ID),
    ) else {
        return Ok(false);
    };

    let open = menu.get_attribute("aria-hidden").as_deref() == Some("false");
    let controller = MenuController {
        trigger: trigger.clone(),
        menu: menu.clone(),
        state: MenuState::new(open),
    };
    controller.sync()?;
    let controller = Rc::new(RefCell::new(controller));

    {
        let controller = controller.clone();
        dom::listen(&trigger, "click", move |event| {
            event.stop_propagation();
            let result = controller.borrow_mut().dispatch(MenuEvent::TriggerClick);
            dom::report("menu: toggle failed", result.map(|_| ()));
        })?;
    }

    {
        let controller = controller.clone();
        dom::listen(document, "click", move |event| {
            let target = event_node(event.target());
            let mut ctl = controller.borrow_mut();
            if ctl.is_outside(target.as_ref()) {
                let result = ctl.dispatch(MenuEvent::OutsideClick);
                dom::report("menu: close failed", result.map(|_| ()));
            }
        })?;
    }

    {
        let controller = controller.clone();
        let doc = document.clone();
        dom::listen(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let mut ctl = controller.borrow_mut();
            let trigger_focused = doc
                .active_element()
                .is_some_and(|active| dom::same_node(&ctl.trigger, &active));
            let Some(menu_event) = MenuEvent::from_key(&key_event.key(), trigger_focused) else {
                return;
            };
            match ctl.dispatch(menu_event) {
                Ok(true) => key_event.prevent_default(),
                Ok(false) => {}
                Err(err) => dom::report("menu: key handling failed", Err(err)),
            }
        })?;
    }

    dom::listen(&menu, "focusout", move |event| {
        let Some(focus_event) = event.dyn_ref::<FocusEvent>() else {
            return;
        };
        let next = event_node(focus_event.related_target());
        let mut ctl = controller.borrow_mut();
        if ctl.is_outside(next.as_ref()) {
            let result = ctl.dispatch(MenuEvent::FocusLeft);
            dom::report("menu: close failed", result.map(|_| ()));
        }
    })?;

    log::debug!("menu toggle attached (open: {open})");
    Ok(true)
}
