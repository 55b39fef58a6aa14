//! Side effects requested by the reducer.
//!
//! `dispatch_global_message` routes the outbound send here through
//! [`execute_network_command`]. Everything else that touches the DOM or
//! the browser history goes through [`execute_ui_command`].

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::canvas::renderer;
use crate::components::sidebar;
use crate::constants::ID_BACKGROUND_CANVAS;
use crate::messages::{Command, Message};
use crate::network::{email_config, EmailClient};
use crate::state::{dispatch_global_message, APP_STATE};

pub fn execute_network_command(cmd: Command) {
    match cmd {
        Command::SendContactMessage(payload) => {
            wasm_bindgen_futures::spawn_local(async move {
                let config = email_config();
                match EmailClient::send(&config, &payload).await {
                    Ok(()) => {
                        debug_log!("Contact message delivered");
                        dispatch_global_message(Message::ContactDelivered);
                    }
                    Err(e) => {
                        web_sys::console::warn_1(&format!("Contact message failed: {}", e).into());
                        dispatch_global_message(Message::ContactDeliveryFailed(e.to_string()));
                    }
                }
            });
        }
        _ => web_sys::console::warn_1(&"Unexpected command type in execute_network_command".into()),
    }
}

pub fn execute_ui_command(cmd: Command) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Err(e) = run_ui_command(&window, &document, cmd) {
        web_sys::console::error_1(&format!("UI command failed: {:?}", e).into());
    }
}

fn run_ui_command(window: &Window, document: &Document, cmd: Command) -> Result<(), JsValue> {
    match cmd {
        Command::PushHistory(path) => {
            window.history()?.push_state_with_url(&JsValue::NULL, "", Some(&path))?;
        }
        Command::RenderPage(route) => crate::views::render_page(document, route)?,
        Command::ScrollToTop => window.scroll_to_with_x_and_y(0.0, 0.0),
        Command::SyncSidebar => {
            let open = APP_STATE.with(|state| state.borrow().sidebar_open);
            sidebar::sync_open(document, open)?;
        }
        Command::ResizeCanvas => {
            let viewport = APP_STATE.with(|state| state.borrow().viewport);
            if let Some(canvas) = document
                .get_element_by_id(ID_BACKGROUND_CANVAS)
                .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            {
                renderer::resize_canvas(&canvas, &viewport);
            }
        }
        Command::RenderContactStatus => {
            let form = APP_STATE.with(|state| state.borrow().contact.clone());
            crate::pages::contact::refresh_status(document, &form)?;
        }
        other => {
            web_sys::console::warn_1(&format!("Unexpected command in execute_ui_command: {:?}", other).into());
        }
    }
    Ok(())
}
