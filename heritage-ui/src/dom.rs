#![cfg(target_arch = "wasm32")]

//! Thin helpers over `web-sys` shared by the controllers.

use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, EventTarget, FocusOptions, HtmlElement, Node, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("Cannot access document"))
}

/// Register a listener that stays attached for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay`.
pub fn set_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(callback);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis(delay),
    )
}

pub fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Log a failed DOM operation without interrupting the page.
pub fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::error_2(&JsValue::from_str(context), &err);
    }
}

/// Focus without letting the browser scroll the element into view; plain
/// `focus()` when options are not supported.
pub fn focus_without_scroll(element: &HtmlElement) -> Result<(), JsValue> {
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    if element.focus_with_options(&options).is_err() {
        element.focus()?;
    }
    Ok(())
}

pub fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// First element of type `T` matching `id`, if present.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn same_node(a: &Element, b: &Element) -> bool {
    let b: &Node = b.as_ref();
    a.is_same_node(Some(b))
}

/// Whether `target` is `container` or one of its descendants.
pub fn contains(container: &Element, target: Option<&Node>) -> bool {
    target.is_some() && container.contains(target)
}
