//! Copyright year in the footer

use web_sys::Document;

use crate::dom;
use crate::error::Result;
use crate::selectors::FOOTER_YEAR;

/// # Errors
///
/// Never fails today; the signature matches the other bindings
pub fn bind(document: &Document) -> Result<bool> {
    let Some(year) = dom::query(document, FOOTER_YEAR) else {
        return Ok(false);
    };
    let current = js_sys::Date::new_0().get_full_year();
    year.set_text_content(Some(&current.to_string()));
    Ok(true)
}
