//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! The pages are built imperatively; these wrappers keep the
//! create/class/text/append dance to one line per element.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{ATTR_KEY, ATTR_ROUTE};

/// Create `<tag class="class">`. An empty class leaves the attribute off.
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create an element holding plain text.
pub fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Create a child element and append it to `parent`.
pub fn append(parent: &Element, document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let child = el(document, tag, class)?;
    parent.append_child(&child)?;
    Ok(child)
}

pub fn append_text(
    parent: &Element,
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let child = text_el(document, tag, class, text)?;
    parent.append_child(&child)?;
    Ok(child)
}

/// Tag a list entry with its render key.
pub fn keyed(element: &Element, key: &str) -> Result<(), JsValue> {
    element.set_attribute(ATTR_KEY, key)
}

/// Remove every child node.
pub fn clear_children(element: &Element) {
    while let Some(child) = element.first_child() {
        let _ = element.remove_child(&child);
    }
}

/// Anchor to an internal page. `ui::events` intercepts clicks on it via `data-route`.
pub fn route_link(document: &Document, path: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let a = text_el(document, "a", class, text)?;
    a.set_attribute("href", path)?;
    a.set_attribute(ATTR_ROUTE, path)?;
    Ok(a)
}

/// Anchor to another site, opened in a new tab.
pub fn external_link(document: &Document, href: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let a = text_el(document, "a", class, text)?;
    a.set_attribute("href", href)?;
    a.set_attribute("target", "_blank")?;
    a.set_attribute("rel", "noopener noreferrer")?;
    Ok(a)
}

/// Row of tech badges.
pub fn badges(document: &Document, items: &[&str], row_class: &str, badge_class: &str) -> Result<Element, JsValue> {
    let row = el(document, "div", row_class)?;
    for item in items {
        append_text(&row, document, "span", badge_class, item)?;
    }
    Ok(row)
}

/// Split `"Label: rest"` into its bold lead-in and body. Only short leads
/// count, so ordinary sentences containing a colon are left alone.
pub fn split_lead(text: &str) -> (Option<&str>, &str) {
    const MAX_LEAD: usize = 32;
    match text.split_once(": ") {
        Some((lead, rest)) if !lead.is_empty() && lead.len() <= MAX_LEAD && !lead.contains('.') => {
            (Some(lead), rest)
        }
        _ => (None, text),
    }
}

/// Fill `target` with `text`, bolding a short `"Label:"` lead-in.
pub fn set_text_with_lead(target: &Element, document: &Document, text: &str) -> Result<(), JsValue> {
    match split_lead(text) {
        (Some(lead), rest) => {
            append_text(target, document, "strong", "", &format!("{}:", lead))?;
            target.append_with_str_1(&format!(" {}", rest))?;
        }
        (None, _) => target.set_text_content(Some(text)),
    }
    Ok(())
}

/// Show the element by toggling CSS classes.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().add_1("hidden");
}

/// Mark a navigation link as the current page.
pub fn set_active(link: &Element) {
    link.set_class_name(crate::constants::CSS_NAV_LINK_ACTIVE);
    let _ = link.set_attribute("aria-current", "page");
}

pub fn set_inactive(link: &Element) {
    link.set_class_name(crate::constants::CSS_NAV_LINK);
    let _ = link.remove_attribute("aria-current");
}

#[cfg(test)]
mod tests {
    use super::split_lead;

    #[test]
    fn short_labels_become_leads() {
        assert_eq!(
            split_lead("Immutability: Prevents alteration of supply chain records"),
            (Some("Immutability"), "Prevents alteration of supply chain records")
        );
        assert_eq!(split_lead("Trust Minimization: No need"), (Some("Trust Minimization"), "No need"));
    }

    #[test]
    fn plain_sentences_are_untouched() {
        let text = "Tax filing reference records";
        assert_eq!(split_lead(text), (None, text));
        let long = "This sentence is far too long to be a label for anything: really";
        assert_eq!(split_lead(long), (None, long));
    }
}
