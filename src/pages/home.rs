use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CSS_PAGE_HEADING;
use crate::content::home::*;
use crate::dom_utils::{append, append_text, keyed, route_link};
use crate::models::slugify;

pub fn render(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page home-page")?;
    let hero = append(&page, document, "div", "hero-section")?;

    let title = append(&hero, document, "h1", &format!("{} hero-title", CSS_PAGE_HEADING))?;
    title.set_text_content(Some(&format!("{} ", GREETING)));
    append_text(&title, document, "span", "gradient-text", NAME)?;

    append_text(&hero, document, "p", "hero-subtitle", TAGLINE)?;
    append_text(&hero, document, "p", "hero-description", DESCRIPTION)?;

    let buttons = append(&hero, document, "div", "hero-buttons")?;
    for (label, path, primary) in ACTIONS {
        let class = if *primary { "btn btn-primary" } else { "btn btn-secondary" };
        let button = route_link(document, path, class, label)?;
        buttons.append_child(&button)?;
    }

    let stats = append(&hero, document, "div", "quick-stats")?;
    for (value, caption) in STATS {
        let item = append(&stats, document, "div", "stat-item")?;
        keyed(&item, &slugify(caption))?;
        append_text(&item, document, "h3", "", value)?;
        append_text(&item, document, "p", "", caption)?;
    }

    Ok(())
}
