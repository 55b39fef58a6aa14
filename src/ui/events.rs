//! Window-level listeners: link interception, history, resize and pointer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, PointerEvent, Window};

use crate::canvas::renderer;
use crate::constants::ATTR_ROUTE;
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Attach every global handler. Call once after the shell exists.
pub fn setup_ui_event_handlers(window: &Window) -> Result<(), JsValue> {
    setup_link_handler(window)?;
    setup_popstate_handler(window)?;
    setup_resize_handler(window)?;
    setup_pointer_handler(window)?;
    Ok(())
}

/// Map a client position to [-1, 1] with y pointing up.
pub fn to_ndc(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    ((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Internal links carry `data-route`; follow them without a page load.
fn setup_link_handler(window: &Window) -> Result<(), JsValue> {
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
        // Leave modified clicks (new tab, etc.) to the browser.
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest(&format!("a[{}]", ATTR_ROUTE)) else {
            return;
        };
        if let Some(path) = link.get_attribute(ATTR_ROUTE) {
            e.prevent_default();
            dispatch_global_message(Message::Navigate(path));
        }
    }));
    document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn setup_popstate_handler(window: &Window) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        let path = web_sys::window().and_then(|w| w.location().pathname().ok());
        if let Some(path) = path {
            dispatch_global_message(Message::RouteChanged(path));
        }
    }));
    window.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn setup_resize_handler(window: &Window) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        let Some(window) = web_sys::window() else { return };
        match renderer::viewport_of(&window) {
            Ok(v) => dispatch_global_message(Message::ViewportResized { width: v.width, height: v.height }),
            Err(e) => web_sys::console::warn_1(&format!("Could not read viewport: {:?}", e).into()),
        }
    }));
    window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn setup_pointer_handler(window: &Window) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: PointerEvent| {
        let Some(window) = web_sys::window() else { return };
        let Ok(v) = renderer::viewport_of(&window) else { return };
        let (x, y) = to_ndc(e.client_x() as f64, e.client_y() as f64, v.width, v.height);
        dispatch_global_message(Message::PointerMoved { x, y });
    }));
    window.add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::to_ndc;

    #[test]
    fn corners_map_to_unit_square() {
        assert_eq!(to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(to_ndc(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn empty_viewport_maps_to_origin() {
        assert_eq!(to_ndc(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }
}
