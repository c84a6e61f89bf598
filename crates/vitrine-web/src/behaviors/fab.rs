//! Floating contact button that gets out of the way while scrolling down

use vitrine_core::behavior::FloatingButton;
use web_sys::Document;

use crate::dom;
use crate::error::Result;
use crate::selectors::FLOATING_BUTTON;

/// # Errors
///
/// Returns an error if the window or its scroll listener is unavailable
pub fn bind(document: &Document) -> Result<bool> {
    let Some(button) = dom::query(document, FLOATING_BUTTON) else {
        return Ok(false);
    };
    let window = dom::window()?;

    let mut tracker = FloatingButton::new();
    let scrolled = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let outcome = dom::scroll_y(&scrolled).and_then(|offset| {
            let visibility = tracker.observe(offset);
            dom::set_style(&button, "transform", visibility.transform())
        });
        dom::log_failure("floating button", outcome);
    })?;

    Ok(true)
}
