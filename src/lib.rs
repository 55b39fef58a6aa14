use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod canvas;
pub mod command_executors;
pub mod components;
pub mod constants;
pub mod contact_form;
pub mod content;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod routes;
pub mod state;
pub mod transitions;
pub mod ui;
pub mod update;
pub mod views;

use crate::messages::Message;
use crate::state::dispatch_global_message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    network::init_email_config();
    mount()
}

/// Build the shell, wire the listeners, render the page for the current
/// location and start the background loop. Does nothing if already mounted.
pub fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("should have a document on window"))?;
    if document.get_element_by_id(constants::ID_MAIN_CONTENT).is_some() {
        return Ok(());
    }

    state::APP_STATE.with(|state| {
        // Truncation is fine: any change in the clock gives a new layout.
        state.borrow_mut().scene_seed = js_sys::Date::now() as u64;
    });

    let ctx = ui::setup::create_base_ui(&document)?;
    ui::events::setup_ui_event_handlers(&window)?;

    let viewport = canvas::renderer::viewport_of(&window)?;
    dispatch_global_message(Message::ViewportResized { width: viewport.width, height: viewport.height });

    let path = window.location().pathname()?;
    debug_log!("Starting at {}", path);
    dispatch_global_message(Message::RouteChanged(path));

    ui::setup_animation_loop(ctx);
    Ok(())
}
