//! Page entrance effects.
//!
//! A freshly mounted page fades and rises into place, then its keyed entries
//! follow one after another. The keyframes live in a `<style>` block that is
//! injected once; each mount only adds classes and an `animation-delay`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{ATTR_KEY, CSS_PAGE_ENTER, CSS_STAGGER_ITEM, ID_TRANSITION_STYLES};
use crate::routes::{ProjectSlug, Route};

/// Entries past this index share the last delay, so long lists don't trickle in.
const MAX_STAGGERED: u32 = 12;

const CSS: &str = "
.page-enter{animation:page-enter var(--enter-duration,600ms) ease-out both}
.stagger-item{animation:stagger-in 500ms ease-out both}
@keyframes page-enter{from{opacity:0;transform:translateY(30px)}to{opacity:1;transform:none}}
@keyframes stagger-in{from{opacity:0;transform:translateY(20px)}to{opacity:1;transform:none}}
@media (prefers-reduced-motion:reduce){.page-enter,.stagger-item{animation:none}}
";

/// Length of the whole-page fade in milliseconds.
pub fn enter_duration_ms(route: Route) -> u32 {
    match route {
        Route::Home => 800,
        _ => 600,
    }
}

/// Gap between consecutive entries in milliseconds.
pub fn stagger_step_ms(route: Route) -> u32 {
    match route {
        Route::Home | Route::About | Route::ProjectDetail(ProjectSlug::Quants) => 200,
        Route::Projects | Route::Certifications | Route::Contact => 150,
        Route::Skills | Route::ProjectDetail(_) => 100,
    }
}

pub fn stagger_delay_ms(step: u32, index: u32) -> u32 {
    step * index.min(MAX_STAGGERED)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_TRANSITION_STYLES).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(ID_TRANSITION_STYLES);
    style.set_text_content(Some(CSS));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document.body().ok_or_else(|| JsValue::from_str("No body found"))?.append_child(&style)?,
    };
    Ok(())
}

/// Start the entrance animation on the page root just mounted for `route`.
pub fn play_entrance(document: &Document, page: &Element, route: Route) -> Result<(), JsValue> {
    ensure_styles(document)?;

    if let Some(page) = page.dyn_ref::<HtmlElement>() {
        page.style().set_property("--enter-duration", &format!("{}ms", enter_duration_ms(route)))?;
    }
    page.class_list().add_1(CSS_PAGE_ENTER)?;

    let step = stagger_step_ms(route);
    let items = page.query_selector_all(&format!("[{}]", ATTR_KEY))?;
    for i in 0..items.length() {
        let Some(item) = items.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else { continue };
        item.class_list().add_1(CSS_STAGGER_ITEM)?;
        item.style().set_property("animation-delay", &format!("{}ms", stagger_delay_ms(step, i)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_each_page() {
        assert_eq!(stagger_step_ms(Route::About), 200);
        assert_eq!(stagger_step_ms(Route::Contact), 150);
        assert_eq!(stagger_step_ms(Route::Skills), 100);
        assert_eq!(stagger_step_ms(Route::ProjectDetail(ProjectSlug::Quants)), 200);
        assert_eq!(stagger_step_ms(Route::ProjectDetail(ProjectSlug::TaxChain)), 100);
        assert_eq!(enter_duration_ms(Route::Home), 800);
    }

    #[test]
    fn delays_grow_then_level_off() {
        let delays: Vec<_> = (0..16).map(|i| stagger_delay_ms(150, i)).collect();
        assert_eq!(&delays[..3], &[0, 150, 300]);
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(delays[15], 150 * MAX_STAGGERED);
    }
}
