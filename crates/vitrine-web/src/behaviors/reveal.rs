//! Reveal-on-scroll for content blocks
//!
//! Blocks start hidden and slightly lowered, then fade and slide into place
//! the first time they intersect the viewport. Each block is unobserved once
//! revealed.

use vitrine_core::behavior::RevealStyle;
use vitrine_core::config::RevealConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::error::{BindError, Result};
use crate::selectors::REVEAL_TARGETS;

/// # Errors
///
/// Returns an error if the observer cannot be created or a style rejected
pub fn bind(document: &Document, config: RevealConfig) -> Result<bool> {
    let targets = dom::query_all(document, REVEAL_TARGETS);
    if targets.is_empty() {
        return Ok(false);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::log_failure("reveal", apply(&target, RevealStyle::Revealed));
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| BindError::ObserverFailed(format!("{e:?}")))?;

    // Keep closure alive
    callback.forget();

    for target in &targets {
        apply(target, RevealStyle::Hidden)?;
        dom::set_style(target, "transition", RevealStyle::TRANSITION)?;
        observer.observe(target);
    }

    Ok(true)
}

/// Set the inline styles for one reveal phase.
///
/// # Errors
///
/// Returns an error if the browser rejects a style property
pub fn apply(target: &Element, style: RevealStyle) -> Result<()> {
    dom::set_style(target, "opacity", style.opacity())?;
    dom::set_style(target, "transform", style.transform())
}
