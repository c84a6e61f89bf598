//! Smooth scrolling for in-page links
//!
//! Links are scrolled to with the fixed header's height subtracted so the
//! target heading is not hidden underneath it.

use vitrine_core::behavior::{anchor_target, scroll_destination};
use vitrine_core::config::ScrollConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::Result;
use crate::selectors::IN_PAGE_LINK;

/// # Errors
///
/// Returns an error if a click listener cannot be attached
pub fn bind(document: &Document, config: ScrollConfig) -> Result<bool> {
    let links = dom::query_all(document, IN_PAGE_LINK);
    if links.is_empty() {
        return Ok(false);
    }

    for link in links {
        let document = document.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            dom::log_failure("anchor scroll", scroll_to_anchor(&document, &anchor, config));
        })?;
    }

    Ok(true)
}

fn scroll_to_anchor(document: &Document, anchor: &Element, config: ScrollConfig) -> Result<()> {
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(selector) = anchor_target(&href) else {
        return Ok(());
    };
    let Some(offset_top) = dom::query(document, selector)
        .as_ref()
        .and_then(|target| target.dyn_ref::<HtmlElement>())
        .map(|target| f64::from(target.offset_top()))
    else {
        return Ok(());
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(offset_top, config.header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
