use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CSS_PAGE_HEADING;
use crate::content::skills::*;
use crate::dom_utils::{append, append_text, keyed};
use crate::models::{slugify, SkillCategory};

fn render_category(grid: &Element, document: &Document, category: &SkillCategory) -> Result<(), JsValue> {
    let card = append(grid, document, "article", "skill-category")?;
    keyed(&card, &category.key())?;
    card.set_attribute("style", &format!("--category-color: {}", category.color))?;

    let header = append(&card, document, "div", "category-header")?;
    append_text(&header, document, "h2", "category-title", category.title)?;
    if category.learning {
        append_text(&header, document, "span", "learning-badge", "Currently Learning")?;
    }

    let list = append(&card, document, "div", "skills-list")?;
    for skill in category.skills {
        let row = append(&list, document, "div", "skill-item")?;
        keyed(&row, &slugify(skill.name))?;
        let label = append(&row, document, "div", "skill-info")?;
        append_text(&label, document, "span", "skill-name", skill.name)?;
        append_text(&label, document, "span", "skill-level", &format!("{}%", skill.level))?;

        let track = append(&row, document, "div", "skill-bar")?;
        let fill = append(&track, document, "div", "skill-progress")?;
        fill.set_attribute(
            "style",
            &format!("width: {}%; background: {}", skill.level.min(100), category.color),
        )?;
    }
    Ok(())
}

pub fn render(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page skills-page")?;
    let header = append(&page, document, "header", "skills-header")?;
    append_text(&header, document, "h1", &format!("{} skills-title", CSS_PAGE_HEADING), HEADING)?;
    append_text(&header, document, "p", "skills-subtitle", SUBTITLE)?;

    let grid = append(&page, document, "div", "skills-grid")?;
    for category in SKILL_CATEGORIES {
        render_category(&grid, document, category)?;
    }

    let tools = append(&page, document, "div", "tools-section")?;
    append_text(&tools, document, "h2", "section-title", "Tools & Technologies")?;
    let cloud = append(&tools, document, "div", "tools-grid")?;
    for tool in TOOLS {
        let tag = append_text(&cloud, document, "span", "tool-tag", tool)?;
        keyed(&tag, &slugify(tool))?;
    }

    let philosophy = append(&page, document, "div", "philosophy-section")?;
    append_text(&philosophy, document, "h2", "section-title", PHILOSOPHY_TITLE)?;
    for paragraph in PHILOSOPHY {
        append_text(&philosophy, document, "p", "", paragraph)?;
    }

    Ok(())
}
