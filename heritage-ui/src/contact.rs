#![cfg(target_arch = "wasm32")]

//! Contact form validation. Nothing is sent anywhere.

use heritage_core::{field_is_invalid, ContactField, ContactSubmission};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::dom;

const FORM_ID: &str = "contactForm";

#[derive(Clone)]
struct ContactFields {
    name: Option<Element>,
    email: Option<Element>,
    message: Option<Element>,
}

impl ContactFields {
    fn lookup(document: &Document) -> Self {
        let by_field = |field: ContactField| document.get_element_by_id(field.element_id());
        Self {
            name: by_field(ContactField::Name),
            email: by_field(ContactField::Email),
            message: by_field(ContactField::Message),
        }
    }

    fn present(&self) -> impl Iterator<Item = &Element> {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .flatten()
    }

    fn submission(&self) -> ContactSubmission {
        let value = |el: &Option<Element>| el.as_ref().map(field_value).unwrap_or_default();
        ContactSubmission::new(value(&self.name), value(&self.email), value(&self.message))
    }
}

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Flag a field after it loses focus; the next sibling is its hint element.
fn mark_field(el: &Element) -> Result<(), JsValue> {
    let invalid = field_is_invalid(&field_value(el));
    el.set_attribute("aria-invalid", dom::bool_attr(invalid))?;
    if let Some(hint) = el.next_element_sibling() {
        hint.class_list().toggle_with_force("error", invalid)?;
    }
    Ok(())
}

fn submit(window: &Window, form: &HtmlFormElement, fields: &ContactFields) -> Result<(), JsValue> {
    match fields.submission().validate() {
        Err(err) => {
            log::debug!("contact form rejected: {err}");
            window.alert_with_message(err.notice())?;
        }
        Ok(valid) => {
            window.alert_with_message(&valid.notice())?;
            form.reset();
            for el in fields.present() {
                el.set_attribute("aria-invalid", "false")?;
            }
        }
    }
    Ok(())
}

/// Attach validation to `#contactForm`. Returns `false` when the form is absent.
pub fn attach(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let Some(form) = dom::element_by_id::<HtmlFormElement>(document, FORM_ID) else {
        return Ok(false);
    };
    let fields = ContactFields::lookup(document);

    for el in fields.present() {
        let target = el.clone();
        dom::listen(el, "blur", move |_| {
            dom::report("contact: field check failed", mark_field(&target));
        })?;
    }

    {
        let window = window.clone();
        let target = form.clone();
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            dom::report("contact: submit failed", submit(&window, &target, &fields));
        })?;
    }

    log::debug!("contact form attached");
    Ok(true)
}
