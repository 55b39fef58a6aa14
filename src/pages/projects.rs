use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CSS_PAGE_HEADING;
use crate::content::projects::*;
use crate::dom_utils::{append, append_text, badges, external_link, keyed, route_link};
use crate::models::Project;

fn render_card(grid: &Element, document: &Document, project: &Project) -> Result<(), JsValue> {
    let card = append(grid, document, "article", "project-card")?;
    keyed(&card, project.key())?;

    let (from, to) = project.gradient;
    let band = append(&card, document, "div", "project-gradient")?;
    band.set_attribute("style", &format!("background: linear-gradient(135deg, {}, {})", from, to))?;
    if project.coming_soon {
        append_text(&card, document, "div", "coming-soon-badge", "Coming Soon")?;
    }

    let body = append(&card, document, "div", "project-content")?;
    append_text(&body, document, "h3", "project-title", project.title)?;
    append_text(&body, document, "p", "project-description", project.description)?;
    let tech = badges(document, project.tech, "project-tech", "tech-tag")?;
    body.append_child(&tech)?;

    let links = append(&body, document, "div", "project-links")?;
    let details = route_link(document, &project.detail_path(), "btn-project btn-details", "View Details")?;
    links.append_child(&details)?;
    let external = append(&links, document, "div", "external-links")?;
    if let Some(url) = project.github {
        let a = external_link(document, url, "icon-link", "GitHub")?;
        a.set_attribute("title", "GitHub")?;
        external.append_child(&a)?;
    }
    if let Some(url) = project.live {
        let a = external_link(document, url, "icon-link", "Live Demo")?;
        a.set_attribute("title", "Live Demo")?;
        external.append_child(&a)?;
    }
    Ok(())
}

pub fn render(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page projects-page")?;
    let header = append(&page, document, "header", "projects-header")?;
    append_text(&header, document, "h1", &format!("{} projects-title", CSS_PAGE_HEADING), HEADING)?;
    append_text(&header, document, "p", "projects-subtitle", SUBTITLE)?;

    let grid = append(&page, document, "div", "projects-grid")?;
    for project in PROJECTS {
        render_card(&grid, document, project)?;
    }
    Ok(())
}
