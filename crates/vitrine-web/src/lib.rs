//! WASM page behaviors for the vitrine marketing site
//!
//! Attaches the image carousel and the independent page behaviors to
//! server-rendered markup. All decisions come from `vitrine-core`; this
//! crate finds elements, listens to events and applies styles.
//!
//! ## Architecture
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Direct web-sys DOM access, no virtual DOM
//! - gloo-timers for autoplay, cooldown and typewriter timing
//! - Fail-soft: absent markup leaves a feature inert, never an error
//!
//! ## Module Structure
//! - `carousel`: carousel binding and command execution
//! - `behaviors`: menu, footer, anchors, header, reveal, typewriter, press, floating button
//! - `config`: page-level configuration overrides
//! - `dom`: panic-free web-sys helpers
//! - `selectors`: markup contract
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod behaviors;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod selectors;

pub use carousel::{CarouselHandle, mount};
pub use error::{BindError, Result};

use vitrine_core::config::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Attach every page behavior once the document is interactive.
///
/// Runs immediately if the DOM is already parsed, otherwise waits for
/// `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error outside a browser context or if the ready listener
/// cannot be attached
pub fn start() -> Result<()> {
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let ready = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| run(&ready))?;
    } else {
        run(&document);
    }

    Ok(())
}

/// JavaScript entry point for pages that load the module by hand.
///
/// # Errors
///
/// Returns the binding error as a string
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() -> std::result::Result<(), JsValue> {
    start().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn run(document: &Document) {
    let config = config::load(document);
    init(document, &config);
}

/// Attach every behavior with the given configuration.
///
/// Each behavior is independent: one failing to bind is logged and does
/// not stop the others.
pub fn init(document: &Document, config: &SiteConfig) {
    web_sys::console::log_1(&"Page loaded - initializing behaviors...".into());

    match dom::query(document, selectors::CAROUSEL_CONTAINER) {
        Some(container) => report(
            "carousel",
            carousel::mount(&container, config.carousel).map(|handle| handle.is_some()),
        ),
        None => web_sys::console::log_1(&"Carousel not found - continuing...".into()),
    }

    report("menu", behaviors::menu::bind(document));
    report("footer year", behaviors::footer::bind(document));
    report("anchor scroll", behaviors::anchors::bind(document, config.scroll));
    report("header", behaviors::header::bind(document, config.scroll));
    report("reveal", behaviors::reveal::bind(document, config.reveal));
    report("typewriter", behaviors::typewriter::bind(document, config.typewriter));
    report("press feedback", behaviors::press::bind(document, config.press));
    report("floating button", behaviors::fab::bind(document));

    web_sys::console::log_1(&"All behaviors initialized".into());
}

fn report(name: &str, outcome: Result<bool>) {
    match outcome {
        Ok(true) => web_sys::console::debug_1(&format!("{name}: bound").into()),
        Ok(false) => web_sys::console::debug_1(&format!("{name}: markup not found, skipped").into()),
        Err(e) => web_sys::console::error_1(&format!("{name}: {e}").into()),
    }
}
