//! Responsive navigation menu toggle

use web_sys::Document;

use crate::dom;
use crate::error::Result;
use crate::selectors::{ACTIVE_CLASS, MENU_TOGGLE, NAV_LINK, NAV_PANEL};

/// Toggle the navigation panel from its button; close it when any of its
/// links is followed.
///
/// # Errors
///
/// Returns an error if a click listener cannot be attached
pub fn bind(document: &Document) -> Result<bool> {
    let (Some(toggle), Some(panel)) = (
        dom::query(document, MENU_TOGGLE),
        dom::query(document, NAV_PANEL),
    ) else {
        return Ok(false);
    };

    let toggled = panel.clone();
    dom::listen(&toggle, "click", move |_| {
        dom::log_failure("menu", dom::toggle_class(&toggled, ACTIVE_CLASS));
    })?;

    for link in dom::query_all(document, NAV_LINK) {
        let panel = panel.clone();
        dom::listen(&link, "click", move |_| {
            dom::log_failure("menu", dom::remove_class(&panel, ACTIVE_CLASS));
        })?;
    }

    Ok(true)
}
