// src/views.rs
//
// Chooses and renders the page for the current route into #main-content,
// then starts its entrance effect.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::sidebar;
use crate::constants::{ID_MAIN_CONTENT, SITE_TITLE_SUFFIX};
use crate::content::project_details;
use crate::dom_utils::clear_children;
use crate::pages;
use crate::routes::Route;
use crate::state::APP_STATE;
use crate::transitions;

/// Replace the main area with the page for `route`. `None` leaves it empty.
pub fn render_page(document: &Document, route: Option<Route>) -> Result<(), JsValue> {
    let main = document
        .get_element_by_id(ID_MAIN_CONTENT)
        .ok_or_else(|| JsValue::from_str("#main-content not found"))?;
    clear_children(&main);

    document.set_title(&route.map(|r| r.title()).unwrap_or_else(|| SITE_TITLE_SUFFIX.to_string()));
    sidebar::set_active_route(document, route)?;

    let Some(route) = route else {
        return Ok(());
    };

    let rendered = match route {
        Route::Home => pages::home::render(document, &main),
        Route::About => pages::about::render(document, &main),
        Route::Projects => pages::projects::render(document, &main),
        Route::Skills => pages::skills::render(document, &main),
        Route::Certifications => pages::certifications::render(document, &main),
        Route::Contact => {
            // Snapshot so no borrow is held while the form is built.
            let form = APP_STATE.with(|state| state.borrow().contact.clone());
            pages::contact::render(document, &main, &form)
        }
        Route::ProjectDetail(slug) => match project_details::by_slug(slug.as_str()) {
            Some(detail) => pages::project_detail::render(document, &main, detail),
            None => Err(JsValue::from_str(&format!("no detail content for {}", slug.as_str()))),
        },
    };
    rendered?;

    match main.first_element_child() {
        Some(page) => transitions::play_entrance(document, &page, route),
        None => Ok(()),
    }
}
