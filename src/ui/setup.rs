use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::components::sidebar;
use crate::constants::{ID_APP, ID_BACKGROUND_CANVAS, ID_MAIN_CONTENT};
use crate::dom_utils::append;

/// Build the page shell: background canvas, sidebar and the empty main area.
/// Reuses an existing `#app` host if the HTML provides one.
pub fn create_base_ui(document: &Document) -> Result<CanvasRenderingContext2d, JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("No body found"))?;
    let app = match document.get_element_by_id(ID_APP) {
        Some(app) => app,
        None => {
            let app = append(&body, document, "div", "app")?;
            app.set_id(ID_APP);
            app
        }
    };

    let canvas = append(&app, document, "canvas", "background-canvas")?.dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(ID_BACKGROUND_CANVAS);
    canvas.set_attribute("aria-hidden", "true")?;

    sidebar::render(document, &app)?;

    let main = append(&app, document, "main", "main-content")?;
    main.set_id(ID_MAIN_CONTENT);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok(ctx)
}
