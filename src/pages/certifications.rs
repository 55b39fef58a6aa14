use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CSS_PAGE_HEADING;
use crate::content::certifications::*;
use crate::dom_utils::{append, append_text, external_link, keyed};
use crate::models::{slugify, Certification};

fn render_card(grid: &Element, document: &Document, cert: &Certification) -> Result<(), JsValue> {
    let card = append(grid, document, "article", "certification-card")?;
    keyed(&card, &cert.key())?;

    let header = append(&card, document, "div", "cert-header")?;
    header.set_attribute("style", &format!("border-color: {}", cert.color))?;
    let titles = append(&header, document, "div", "cert-title-section")?;
    append_text(&titles, document, "h3", "cert-title", cert.title)?;
    append_text(&titles, document, "p", "cert-issuer", cert.issuer)?;

    let body = append(&card, document, "div", "cert-body")?;
    append_text(&body, document, "p", "cert-description", cert.description)?;
    let meta = append(&body, document, "div", "cert-meta")?;
    append_text(&meta, document, "span", "meta-item", &cert.issued_display())?;
    if let Some(courses) = cert.courses {
        append_text(&meta, document, "span", "meta-item", &format!("{} Courses Completed", courses))?;
    }
    if let Some(until) = cert.valid_until_display() {
        append_text(&body, document, "div", "validity-badge", &format!("Valid until: {}", until))?;
    }
    if let Some(id) = cert.cert_id {
        let line = append(&body, document, "div", "cert-id")?;
        append_text(&line, document, "strong", "", "Certificate ID:")?;
        line.append_with_str_1(&format!(" {}", id))?;
    }

    let footer = append(&card, document, "div", "cert-footer")?;
    match cert.verify {
        Some(url) => {
            let link = external_link(document, url, "verify-btn", "Verify Certificate")?;
            link.set_attribute(
                "style",
                &format!("background: linear-gradient(135deg, {0}, {0}dd)", cert.color),
            )?;
            footer.append_child(&link)?;
        }
        None => {
            let badge = append_text(&footer, document, "div", "no-link-badge", "Verified Certificate")?;
            badge.set_attribute("style", &format!("color: {}", cert.color))?;
        }
    }
    Ok(())
}

pub fn render(document: &Document, container: &Element) -> Result<(), JsValue> {
    let page = append(container, document, "section", "page certifications-page")?;
    let header = append(&page, document, "header", "certifications-header")?;
    append_text(&header, document, "h1", &format!("{} certifications-title", CSS_PAGE_HEADING), HEADING)?;
    append_text(&header, document, "p", "certifications-subtitle", SUBTITLE)?;
    let stats = append(&header, document, "div", "stats-row")?;
    for stat in STATS {
        append_text(&stats, document, "span", "stat-badge", stat)?;
    }

    let grid = append(&page, document, "div", "certifications-grid")?;
    for cert in CERTIFICATIONS {
        render_card(&grid, document, cert)?;
    }

    let extra = append(&page, document, "div", "achievements-section")?;
    append_text(&extra, document, "h2", "section-title", "Additional Achievements")?;
    let grid = append(&extra, document, "div", "achievements-grid")?;
    for (number, card) in ACHIEVEMENTS {
        let item = append(&grid, document, "div", "achievement-card")?;
        keyed(&item, &slugify(card.title))?;
        append_text(&item, document, "div", "achievement-number", number)?;
        append_text(&item, document, "p", "achievement-label", card.title)?;
        append_text(&item, document, "p", "achievement-desc", card.text)?;
    }

    let journey = append(&page, document, "div", "learning-journey")?;
    append_text(&journey, document, "h2", "section-title", JOURNEY_TITLE)?;
    for paragraph in JOURNEY {
        append_text(&journey, document, "p", "", paragraph)?;
    }

    Ok(())
}
