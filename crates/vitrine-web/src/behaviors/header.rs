//! Header that tightens and gains a shadow once the page scrolls

use vitrine_core::behavior::HeaderStyle;
use vitrine_core::config::ScrollConfig;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::Result;
use crate::selectors::HEADER;

/// # Errors
///
/// Returns an error if the window or its scroll listener is unavailable
pub fn bind(document: &Document, config: ScrollConfig) -> Result<bool> {
    let Some(header) = dom::query(document, HEADER) else {
        return Ok(false);
    };
    let window = dom::window()?;

    let scrolled = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let outcome = dom::scroll_y(&scrolled)
            .and_then(|y| restyle(&header, y, config.header_threshold));
        dom::log_failure("header", outcome);
    })?;

    Ok(true)
}

/// Apply the header style for scroll offset `scroll_y`.
///
/// # Errors
///
/// Returns an error if the browser rejects a style property
pub fn restyle(header: &Element, scroll_y: f64, threshold: f64) -> Result<HeaderStyle> {
    let style = HeaderStyle::for_offset(scroll_y, threshold);
    dom::set_style(header, "box-shadow", style.box_shadow())?;
    dom::set_style(header, "padding", style.padding())?;
    Ok(style)
}
