//! Persistent navigation sidebar.
//!
//! Built once at start-up. Route changes only flip classes on the existing
//! links via [`set_active_route`] and [`sync_open`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::constants::{
    ATTR_ROUTE, CSS_NAV_LINK, CSS_SIDEBAR_OPEN, ID_SIDEBAR, ID_SIDEBAR_TOGGLE, SITE_OWNER, SITE_OWNER_SHORT,
};
use crate::dom_utils::{append, append_text, external_link, keyed, route_link, set_active, set_inactive};
use crate::messages::Message;
use crate::routes::Route;
use crate::state::dispatch_global_message;

const SOCIAL: [(&str, &str); 2] = [
    ("GitHub", "https://github.com/MageshCM"),
    ("LinkedIn", "https://www.linkedin.com/in/magesh-c-m-9635ab379"),
];

/// Build the toggle button and `<aside id="sidebar">` and append both to `parent`.
pub fn render(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let toggle = append_text(parent, document, "button", "sidebar-toggle", "\u{2630}")?;
    toggle.set_id(ID_SIDEBAR_TOGGLE);
    toggle.set_attribute("type", "button")?;
    toggle.set_attribute("aria-label", "Toggle navigation")?;
    toggle.set_attribute("aria-controls", ID_SIDEBAR)?;
    toggle.set_attribute("aria-expanded", "false")?;

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        dispatch_global_message(Message::ToggleSidebar);
    }));
    toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();

    let aside = append(parent, document, "aside", "sidebar")?;
    aside.set_id(ID_SIDEBAR);

    let brand = append(&aside, document, "div", "sidebar-header")?;
    let logo = route_link(document, Route::Home.path(), "logo", SITE_OWNER_SHORT)?;
    brand.append_child(&logo)?;
    append_text(&brand, document, "p", "sidebar-subtitle", SITE_OWNER)?;

    let nav = append(&aside, document, "nav", "sidebar-nav")?;
    for route in Route::nav_items() {
        let link = route_link(document, route.path(), CSS_NAV_LINK, route.label())?;
        keyed(&link, route.label())?;
        nav.append_child(&link)?;
    }

    let footer = append(&aside, document, "div", "sidebar-footer")?;
    for (label, href) in SOCIAL {
        let social = external_link(document, href, "social-link", label)?;
        footer.append_child(&social)?;
    }
    Ok(())
}

/// Highlight the nav entry for `route`; `None` clears every highlight.
pub fn set_active_route(document: &Document, route: Option<Route>) -> Result<(), JsValue> {
    let active = route.map(|r| r.nav_parent().path());
    let links = document.query_selector_all(&format!("#{} a.{}", ID_SIDEBAR, CSS_NAV_LINK))?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else { continue };
        if link.get_attribute(ATTR_ROUTE).as_deref() == active {
            set_active(&link);
        } else {
            set_inactive(&link);
        }
    }
    Ok(())
}

pub fn sync_open(document: &Document, open: bool) -> Result<(), JsValue> {
    if let Some(aside) = document.get_element_by_id(ID_SIDEBAR) {
        let classes = aside.class_list();
        if open {
            classes.add_1(CSS_SIDEBAR_OPEN)?;
        } else {
            classes.remove_1(CSS_SIDEBAR_OPEN)?;
        }
    }
    if let Some(toggle) = document.get_element_by_id(ID_SIDEBAR_TOGGLE) {
        toggle.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
    }
    Ok(())
}
