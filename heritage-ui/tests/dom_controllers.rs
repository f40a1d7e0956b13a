#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use heritage_core::{success_notice, INVALID_NOTICE};
use heritage_ui::mount_page;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

wasm_bindgen_test_configure!(run_in_browser);

const FORM_MARKUP: &str = r#"
<form id="contactForm">
  <input id="name" type="text"><span class="hint"></span>
  <input id="email" type="text"><span class="hint"></span>
  <textarea id="message"></textarea><span class="hint"></span>
  <button type="submit">Enviar</button>
</form>
"#;

const MENU_MARKUP: &str = r##"
<nav>
  <button id="games-button" aria-expanded="false">Jogos</button>
  <ul id="games-menu" aria-hidden="true"><li><a href="#">Ouri</a></li></ul>
</nav>
<p id="outside">Patrimônio</p>
"##;

fn render(markup: &str) -> Document {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("test page has a document");
    document
        .body()
        .expect("test page has a body")
        .set_inner_html(markup);
    document
}

/// Replace `window.alert` so notices can be asserted without blocking.
fn capture_alerts() -> Rc<RefCell<Vec<String>>> {
    let alerts = Rc::new(RefCell::new(Vec::new()));
    let sink = alerts.clone();
    let stub = Closure::<dyn FnMut(String)>::new(move |message: String| {
        sink.borrow_mut().push(message);
    });
    let window = web_sys::window().expect("test page has a window");
    js_sys::Reflect::set(&window, &JsValue::from_str("alert"), stub.as_ref())
        .expect("alert can be replaced");
    stub.forget();
    alerts
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .unwrap_or_else(|| panic!("#{id} is missing or has the wrong type"))
}

fn fill_form(document: &Document, name: &str, email: &str, message: &str) {
    by_id::<HtmlInputElement>(document, "name").set_value(name);
    by_id::<HtmlInputElement>(document, "email").set_value(email);
    by_id::<HtmlTextAreaElement>(document, "message").set_value(message);
}

fn submit(document: &Document) {
    let form = by_id::<HtmlFormElement>(document, "contactForm");
    let event = Event::new("submit").expect("submit event");
    form.dispatch_event(&event).expect("submit dispatched");
}

fn aria(document: &Document, id: &str, attr: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.get_attribute(attr))
}

#[wasm_bindgen_test]
fn valid_submission_clears_the_form() {
    let alerts = capture_alerts();
    let document = render(FORM_MARKUP);
    mount_page().expect("page mounts");

    fill_form(&document, "Ana", "a@b.co", "Olá");
    by_id::<HtmlInputElement>(&document, "name")
        .set_attribute("aria-invalid", "true")
        .expect("attribute set");
    submit(&document);

    assert_eq!(by_id::<HtmlInputElement>(&document, "name").value(), "");
    assert_eq!(by_id::<HtmlInputElement>(&document, "email").value(), "");
    assert_eq!(by_id::<HtmlTextAreaElement>(&document, "message").value(), "");
    for id in ["name", "email", "message"] {
        assert_eq!(aria(&document, id, "aria-invalid").as_deref(), Some("false"));
    }
    assert_eq!(alerts.borrow().last(), Some(&success_notice("Ana")));
}

#[wasm_bindgen_test]
fn malformed_email_keeps_the_form_populated() {
    let alerts = capture_alerts();
    let document = render(FORM_MARKUP);
    mount_page().expect("page mounts");

    fill_form(&document, "Ana", "bad-email", "Olá");
    submit(&document);

    assert_eq!(by_id::<HtmlInputElement>(&document, "name").value(), "Ana");
    assert_eq!(by_id::<HtmlInputElement>(&document, "email").value(), "bad-email");
    assert_eq!(by_id::<HtmlTextAreaElement>(&document, "message").value(), "Olá");
    assert_eq!(alerts.borrow().last().map(String::as_str), Some(INVALID_NOTICE));
}

#[wasm_bindgen_test]
fn trigger_click_does_not_reach_the_document() {
    let document = render(MENU_MARKUP);
    mount_page().expect("page mounts");

    let document_clicks = Rc::new(Cell::new(0));
    let counter = document_clicks.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        counter.set(counter.get() + 1);
    });
    document
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .expect("listener added");

    by_id::<HtmlElement>(&document, "games-button").click();
    assert_eq!(document_clicks.get(), 0);
    assert_eq!(aria(&document, "games-button", "aria-expanded").as_deref(), Some("true"));
    assert_eq!(aria(&document, "games-menu", "aria-hidden").as_deref(), Some("false"));

    by_id::<HtmlElement>(&document, "outside").click();
    assert_eq!(document_clicks.get(), 1);
    assert_eq!(aria(&document, "games-button", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(aria(&document, "games-menu", "aria-hidden").as_deref(), Some("true"));

    document
        .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .expect("listener removed");
}
