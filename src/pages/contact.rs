//! Contact page: the message form plus the static channel list.
//!
//! The form is rendered once per visit. Afterwards only [`refresh_status`]
//! touches it, so typing is never interrupted by a re-render.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use crate::constants::{CSS_PAGE_HEADING, ID_CONTACT_STATUS, ID_CONTACT_SUBMIT};
use crate::contact_form::{ContactField, ContactForm};
use crate::content::contact::*;
use crate::dom_utils::{append, append_text, external_link, hide, keyed, show};
use crate::messages::Message;
use crate::state::dispatch_global_message;

fn current_value(target: &web_sys::EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn render_field(form: &Element, document: &Document, field: ContactField, value: &str) -> Result<(), JsValue> {
    let group = append(form, document, "div", "form-group")?;
    let label = append_text(&group, document, "label", "", field.label())?;
    label.set_attribute("for", field.id())?;

    let input = match field {
        ContactField::Message => {
            let area = document.create_element("textarea")?.dyn_into::<HtmlTextAreaElement>()?;
            area.set_rows(6);
            area.set_value(value);
            area.unchecked_into::<Element>()
        }
        _ => {
            let input = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
            input.set_type(if field == ContactField::Email { "email" } else { "text" });
            input.set_value(value);
            input.unchecked_into::<Element>()
        }
    };
    input.set_id(field.id());
    input.set_attribute("name", field.id())?;
    input.set_attribute("placeholder", field.placeholder())?;

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        if let Some(value) = e.target().as_ref().and_then(current_value) {
            dispatch_global_message(Message::UpdateContactField { field, value });
        }
    }));
    input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();

    group.append_child(&input)?;
    Ok(())
}

fn render_form(parent: &Element, document: &Document, form_state: &ContactForm) -> Result<(), JsValue> {
    let card = append(parent, document, "div", "contact-form-card")?;
    append_text(&card, document, "h2", "", FORM_HEADING)?;

    let form = append(&card, document, "form", "contact-form")?;
    let stop_submit = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        dispatch_global_message(Message::SubmitContact);
    }));
    form.add_event_listener_with_callback("submit", stop_submit.as_ref().unchecked_ref())?;
    stop_submit.forget();

    for field in ContactField::ALL {
        render_field(&form, document, field, form_state.field(field))?;
    }

    let status = append(&form, document, "div", "status-message hidden")?;
    status.set_id(ID_CONTACT_STATUS);
    status.set_attribute("role", "status")?;

    let button = append_text(&form, document, "button", "btn-submit", SUBMIT_LABEL)?;
    button.set_id(ID_CONTACT_SUBMIT);
    button.set_attribute("type", "submit")?;

    refresh_status(document, form_state)
}

fn render_info(parent: &Element, document: &Document) -> Result<(), JsValue> {
    let column = append(parent, document, "div", "contact-info-section")?;
    let card = append(&column, document, "div", "contact-info-card")?;
    append_text(&card, document, "h2", "", INFO_HEADING)?;

    let list = append(&card, document, "div", "contact-items")?;
    for channel in CHANNELS {
        let item = match channel.link {
            Some(href) if channel.opens_new_tab() => external_link(document, href, "contact-item", "")?,
            Some(href) => {
                let a = document.create_element("a")?;
                a.set_class_name("contact-item");
                a.set_attribute("href", href)?;
                a
            }
            None => document.create_element("div").map(|d| {
                d.set_class_name("contact-item");
                d
            })?,
        };
        keyed(&item, &channel.key())?;
        item.set_attribute("style", &format!("--channel-color: {}", channel.color))?;
        let text = append(&item, document, "div", "contact-text")?;
        append_text(&text, document, "span", "contact-label", channel.label)?;
        append_text(&text, document, "span", "contact-value", channel.value)?;
        list.append_child(&item)?;
    }

    let note = append(&column, document, "div", "contact-note-card")?;
    append_text(&note, document, "h3", "", NOTE_TITLE)?;
    for paragraph in NOTE {
        append_text(&note, document, "p", "", paragraph)?;
    }
    Ok(())
}

pub fn render(document: &Document, container: &Element, form_state: &ContactForm) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page contact-page")?;
    let header = append(&page, document, "div", "page-header")?;
    append_text(&header, document, "h1", CSS_PAGE_HEADING, HEADING)?;
    append_text(&header, document, "p", "page-subtitle", SUBTITLE)?;

    let grid = append(&page, document, "div", "contact-grid")?;
    render_form(&grid, document, form_state)?;
    render_info(&grid, document)
}

/// Sync the already-rendered form with `form_state`. A no-op when the
/// contact page is not on screen.
pub fn refresh_status(document: &Document, form_state: &ContactForm) -> Result<(), JsValue> {
    let Some(status) = document.get_element_by_id(ID_CONTACT_STATUS) else {
        return Ok(());
    };

    for field in ContactField::ALL {
        let Some(el) = document.get_element_by_id(field.id()) else { continue };
        let value = form_state.field(field);
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            if input.value() != value {
                input.set_value(value);
            }
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            if area.value() != value {
                area.set_value(value);
            }
        }
    }

    if let Some(button) = document
        .get_element_by_id(ID_CONTACT_SUBMIT)
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
    {
        let sending = form_state.is_sending();
        button.set_disabled(sending);
        button.set_text_content(Some(if sending { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL }));
    }

    status.set_class_name(form_state.status_class());
    match form_state.status_message() {
        Some(text) => {
            status.set_text_content(Some(text));
            show(&status);
        }
        None => {
            status.set_text_content(None);
            hide(&status);
        }
    }
    Ok(())
}
