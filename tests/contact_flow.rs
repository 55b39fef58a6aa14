//! Browser tests for the contact form. Most delivery outcomes are injected
//! as messages; the end-to-end test points the client at a closed local port
//! so the request fails without leaving the machine.

#![cfg(target_arch = "wasm32")]

use portfolio_frontend::constants::{ID_CONTACT_STATUS, ID_CONTACT_SUBMIT};
use portfolio_frontend::contact_form::{ContactField, SubmissionStatus};
use portfolio_frontend::content::contact::{FAILURE_MESSAGE, SUBMIT_BUSY_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE};
use portfolio_frontend::messages::Message;
use portfolio_frontend::network::init_email_config_js;
use portfolio_frontend::state::{dispatch_global_message, APP_STATE};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

const VALUES: [(ContactField, &str); 4] = [
    (ContactField::Name, "Grace Hopper"),
    (ContactField::Email, "grace@example.com"),
    (ContactField::Subject, "Compilers"),
    (ContactField::Message, "Loved the projects page."),
];

fn document() -> Document {
    portfolio_frontend::mount().expect("mount");
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh contact page with an idle form.
fn open_contact() -> Document {
    let doc = document();
    APP_STATE.with(|s| s.borrow_mut().contact = Default::default());
    dispatch_global_message(Message::RouteChanged("/contact".into()));
    doc
}

fn field_value(doc: &Document, field: ContactField) -> String {
    let el = doc.get_element_by_id(field.id()).expect("field");
    match el.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => el.dyn_into::<HtmlTextAreaElement>().unwrap().value(),
    }
}

fn type_into(doc: &Document, field: ContactField, value: &str) {
    let el = doc.get_element_by_id(field.id()).expect("field");
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else {
        el.dyn_ref::<HtmlTextAreaElement>().unwrap().set_value(value);
    }
    el.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

fn fill(doc: &Document) {
    for (field, value) in VALUES {
        type_into(doc, field, value);
    }
}

fn submit_button(doc: &Document) -> HtmlButtonElement {
    doc.get_element_by_id(ID_CONTACT_SUBMIT).unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn typing_updates_state() {
    let doc = open_contact();
    fill(&doc);
    APP_STATE.with(|s| {
        let s = s.borrow();
        for (field, value) in VALUES {
            assert_eq!(s.contact.field(field), value);
        }
    });
}

#[wasm_bindgen_test]
fn successful_send_clears_fields_and_reports_success() {
    let doc = open_contact();
    fill(&doc);
    // Mark as sending without going through the network executor.
    APP_STATE.with(|s| s.borrow_mut().contact.begin_submit());
    dispatch_global_message(Message::ContactDelivered);

    for (field, _) in VALUES {
        assert_eq!(field_value(&doc, field), "", "{:?}", field);
    }
    let status = doc.get_element_by_id(ID_CONTACT_STATUS).unwrap();
    assert_eq!(status.text_content().as_deref(), Some(SUCCESS_MESSAGE));
    assert!(status.class_list().contains("success"));
    assert!(!submit_button(&doc).disabled());
}

#[wasm_bindgen_test]
fn failed_send_keeps_fields_and_reports_failure() {
    let doc = open_contact();
    fill(&doc);
    APP_STATE.with(|s| s.borrow_mut().contact.begin_submit());
    dispatch_global_message(Message::ContactDeliveryFailed("HTTP 400".into()));

    for (field, value) in VALUES {
        assert_eq!(field_value(&doc, field), value);
    }
    let status = doc.get_element_by_id(ID_CONTACT_STATUS).unwrap();
    assert_eq!(status.text_content().as_deref(), Some(FAILURE_MESSAGE));
    assert!(status.class_list().contains("error"));
}

#[wasm_bindgen_test]
fn sending_state_disables_the_button() {
    let doc = open_contact();
    APP_STATE.with(|s| s.borrow_mut().contact.begin_submit());
    dispatch_global_message(Message::RouteChanged("/contact".into()));
    let button = submit_button(&doc);
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some(SUBMIT_BUSY_LABEL));

    dispatch_global_message(Message::ContactDeliveryFailed("offline".into()));
    assert!(!submit_button(&doc).disabled());
    assert_eq!(submit_button(&doc).text_content().as_deref(), Some(SUBMIT_LABEL));
    assert_eq!(APP_STATE.with(|s| s.borrow().contact.status), SubmissionStatus::Error);
}

#[wasm_bindgen_test]
fn result_arriving_on_another_page_is_shown_on_return() {
    let doc = open_contact();
    fill(&doc);
    APP_STATE.with(|s| s.borrow_mut().contact.begin_submit());
    dispatch_global_message(Message::RouteChanged("/about".into()));
    dispatch_global_message(Message::ContactDelivered);
    dispatch_global_message(Message::RouteChanged("/contact".into()));

    let status = doc.get_element_by_id(ID_CONTACT_STATUS).unwrap();
    assert_eq!(status.text_content().as_deref(), Some(SUCCESS_MESSAGE));
    assert_eq!(field_value(&doc, ContactField::Name), "");
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn submitting_the_form_reports_a_failed_delivery() {
    let config = js_sys::JSON::parse(
        r#"{"serviceId":"service_test","templateId":"template_test","publicKey":"key_test","apiBase":"http://127.0.0.1:9"}"#,
    )
    .unwrap();
    init_email_config_js(config).unwrap();

    let doc = open_contact();
    fill(&doc);
    let form = doc.query_selector("form.contact-form").unwrap().expect("form");
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    let button = submit_button(&doc);
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some(SUBMIT_BUSY_LABEL));
    assert_eq!(APP_STATE.with(|s| s.borrow().contact.status), SubmissionStatus::Sending);

    // A second submit while the first is in flight changes nothing.
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    for _ in 0..200 {
        if APP_STATE.with(|s| s.borrow().contact.status) != SubmissionStatus::Sending {
            break;
        }
        sleep_ms(50).await;
    }

    assert_eq!(APP_STATE.with(|s| s.borrow().contact.status), SubmissionStatus::Error);
    for (field, value) in VALUES {
        assert_eq!(field_value(&doc, field), value, "{:?}", field);
    }
    let status = doc.get_element_by_id(ID_CONTACT_STATUS).unwrap();
    assert_eq!(status.text_content().as_deref(), Some(FAILURE_MESSAGE));
    assert!(status.class_list().contains("error"));
    assert!(!submit_button(&doc).disabled());
}
