//! Shared renderer for the four `/projects/<slug>` pages.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{CSS_PAGE_HEADING, ROUTE_PROJECTS};
use crate::content::project_details::BACK_LINK;
use crate::dom_utils::{append, append_text, badges, external_link, keyed, route_link, set_text_with_lead};
use crate::models::{ProjectDetail, Section, SectionBody, TitledBlock};

fn render_titled(parent: &Element, document: &Document, block: &TitledBlock) -> Result<(), JsValue> {
    let wrapper = append(parent, document, "div", "titled-block")?;
    append_text(&wrapper, document, "h3", "", block.title)?;
    for paragraph in block.paragraphs {
        append_text(&wrapper, document, "p", "", paragraph)?;
    }
    if !block.bullets.is_empty() {
        let list = append(&wrapper, document, "ul", "detail-list")?;
        for bullet in block.bullets {
            let li = append(&list, document, "li", "")?;
            set_text_with_lead(&li, document, bullet)?;
        }
    }
    Ok(())
}

fn render_body(parent: &Element, document: &Document, body: &SectionBody) -> Result<(), JsValue> {
    match *body {
        SectionBody::Paragraphs(paragraphs) => {
            for paragraph in paragraphs {
                append_text(parent, document, "p", "", paragraph)?;
            }
        }
        SectionBody::Features(cards) => {
            let grid = append(parent, document, "div", "features-grid")?;
            for card in cards {
                let item = append(&grid, document, "div", "feature-card")?;
                append_text(&item, document, "h3", "", card.title)?;
                append_text(&item, document, "p", "", card.text)?;
            }
        }
        SectionBody::Bullets(items) => {
            let list = append(parent, document, "ul", "detail-list")?;
            for item in items {
                let li = append(&list, document, "li", "")?;
                set_text_with_lead(&li, document, item)?;
            }
        }
        SectionBody::Numbered(cards) => {
            let list = append(parent, document, "div", "numbered-list")?;
            for (i, card) in cards.iter().enumerate() {
                let item = append(&list, document, "div", "numbered-item")?;
                append_text(&item, document, "span", "item-number", &(i + 1).to_string())?;
                let text = append(&item, document, "div", "")?;
                if !card.title.is_empty() {
                    append_text(&text, document, "h4", "", card.title)?;
                }
                append_text(&text, document, "p", "", card.text)?;
            }
        }
        SectionBody::Roles(roles) => {
            let grid = append(parent, document, "div", "roles-grid")?;
            for role in roles {
                let card = append(&grid, document, "div", "role-card")?;
                append_text(&card, document, "h3", "", role.role)?;
                let list = append(&card, document, "ul", "")?;
                for action in role.actions {
                    append_text(&list, document, "li", "", action)?;
                }
            }
        }
        SectionBody::Tech(items) => {
            let row = badges(document, items, "tech-stack", "tech-badge")?;
            parent.append_child(&row)?;
        }
        SectionBody::Titled(blocks) => {
            for block in blocks {
                render_titled(parent, document, block)?;
            }
        }
    }
    Ok(())
}

fn render_section(parent: &Element, document: &Document, section: &Section) -> Result<(), JsValue> {
    let class = if section.highlight { "section highlight-section" } else { "section" };
    let el = append(parent, document, "section", class)?;
    keyed(&el, &section.key())?;
    append_text(&el, document, "h2", "section-title", section.heading)?;
    render_body(&el, document, &section.body)
}

pub fn render(document: &Document, container: &Element, detail: &ProjectDetail) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page project-detail-page")?;
    keyed(&page, detail.slug)?;
    page.set_attribute("style", &format!("--accent: {}", detail.accent))?;

    let back = route_link(document, ROUTE_PROJECTS, "back-link", &format!("\u{2190} {}", BACK_LINK))?;
    page.append_child(&back)?;

    let header = append(&page, document, "header", "project-header")?;
    let badge = append_text(&header, document, "div", "project-badge", detail.badge)?;
    badge.set_attribute("style", &format!("color: {}", css_var!("accent")))?;
    append_text(&header, document, "h1", &format!("{} project-main-title", CSS_PAGE_HEADING), detail.title)?;
    append_text(&header, document, "p", "project-tagline", detail.tagline)?;

    if !detail.coming_soon {
        let actions = append(&header, document, "div", "project-action-links")?;
        if let Some(url) = detail.github {
            let code = external_link(document, url, "btn btn-github", "View Code")?;
            actions.append_child(&code)?;
        }
        if let Some(url) = detail.live {
            let live = external_link(document, url, "btn btn-live", "Live Demo")?;
            actions.append_child(&live)?;
        }
    }

    for section in detail.sections {
        render_section(&page, document, section)?;
    }

    if let Some(outro) = detail.outro {
        let cta = append(&page, document, "section", "section coming-soon-cta")?;
        keyed(&cta, "outro")?;
        let title = append_text(&cta, document, "h3", "", outro.title)?;
        title.set_attribute("style", &format!("color: {}", css_var!("accent")))?;
        append_text(&cta, document, "p", "", outro.text)?;
    }

    Ok(())
}
