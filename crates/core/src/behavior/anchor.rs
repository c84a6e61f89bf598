//! In-page anchor links with a fixed-header offset.

/// Selector to scroll to for an in-page link, if any.
///
/// Only hrefs of the form `#id` qualify; a bare `#` means "do nothing".
///
/// ```
/// use vitrine_core::behavior::anchor_target;
///
/// assert_eq!(anchor_target("#contato"), Some("#contato"));
/// assert_eq!(anchor_target("#"), None);
/// assert_eq!(anchor_target("/servicos"), None);
/// ```
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let trimmed = href.trim();
    (trimmed.starts_with('#') && trimmed.len() > 1).then_some(trimmed)
}

/// Document offset to scroll to so the target clears the fixed header.
///
/// Never negative: a target near the top scrolls to the very top.
#[must_use]
pub fn scroll_destination(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}
