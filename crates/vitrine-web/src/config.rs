//! Page-level configuration overrides
//!
//! A page may embed `<script type="application/json" id="vitrine-config">`
//! with any subset of [`SiteConfig`]. Without it every behavior uses the
//! site defaults.

use vitrine_core::config::SiteConfig;
use web_sys::Document;

use crate::dom;
use crate::selectors::CONFIG_SCRIPT;

/// Read the page's configuration, falling back to defaults when the script
/// is absent or invalid.
#[must_use]
pub fn load(document: &Document) -> SiteConfig {
    let Some(source) = dom::query(document, CONFIG_SCRIPT).and_then(|script| script.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&source).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring page configuration: {e}").into());
        SiteConfig::default()
    })
}
