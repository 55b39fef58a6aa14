use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CSS_PAGE_HEADING;
use crate::content::about::*;
use crate::dom_utils::{append, append_text, keyed};

fn card(grid: &Element, document: &Document, class: &str, key: &str, title: &str) -> Result<Element, JsValue> {
    let card = append(grid, document, "article", class)?;
    keyed(&card, key)?;
    append_text(&card, document, "h2", "", title)?;
    Ok(card)
}

pub fn render(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page about-page")?;
    append_text(&page, document, "h1", &format!("{} about-title", CSS_PAGE_HEADING), HEADING)?;

    let grid = append(&page, document, "div", "about-grid")?;

    let bio = card(&grid, document, "about-card", "bio", BIO_TITLE)?;
    for paragraph in BIO {
        append_text(&bio, document, "p", "", paragraph)?;
    }

    let journey = card(&grid, document, "about-card", "journey", JOURNEY_TITLE)?;
    let education = append(&journey, document, "div", "timeline-item")?;
    append_text(&education, document, "h3", "", EDUCATION.heading)?;
    append_text(&education, document, "p", "timeline-title", EDUCATION.degree)?;
    append_text(&education, document, "p", "timeline-org", EDUCATION.school)?;
    append_text(&education, document, "p", "timeline-date", EDUCATION.period)?;

    let experience = append(&journey, document, "div", "timeline-item")?;
    append_text(&experience, document, "h3", "", EXPERIENCE_HEADING)?;
    append_text(&experience, document, "p", "timeline-desc", EXPERIENCE)?;

    let achievements = append(&journey, document, "div", "timeline-item")?;
    append_text(&achievements, document, "h3", "", ACHIEVEMENTS_HEADING)?;
    let list = append(&achievements, document, "ul", "achievements-list")?;
    for item in ACHIEVEMENTS {
        append_text(&list, document, "li", "", item)?;
    }

    let philosophy = card(&grid, document, "about-card philosophy-card", "philosophy", PHILOSOPHY_TITLE)?;
    append_text(&philosophy, document, "blockquote", "", PHILOSOPHY_QUOTE)?;
    append_text(&philosophy, document, "p", "", PHILOSOPHY)?;

    let facts = card(&grid, document, "about-card fun-facts", "fun-facts", FUN_FACTS_TITLE)?;
    let list = append(&facts, document, "ul", "")?;
    for fact in FUN_FACTS {
        append_text(&list, document, "li", "", fact)?;
    }

    Ok(())
}
