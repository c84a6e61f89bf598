//! Panic-free helpers over the web-sys calls every binding needs.
//!
//! Lookups return `Option`/`Vec` so that absent markup flows into the
//! fail-soft path; only environmental failures become [`BindError`]s.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{BindError, Result};

/// Get window object
///
/// # Errors
///
/// Returns an error outside a browser context
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(BindError::WindowNotAvailable)
}

/// Get document from window
///
/// # Errors
///
/// Returns an error if there is no window or it has no document
pub fn document() -> Result<Document> {
    window()?.document().ok_or(BindError::DocumentNotAvailable)
}

/// First element in the document matching `selector`. Invalid selectors
/// match nothing.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element in the document matching `selector`.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// First descendant of `root` matching `selector`.
#[must_use]
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Every descendant of `root` matching `selector`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `target` for the rest of the page's life.
///
/// # Errors
///
/// Returns an error if the browser rejects the listener
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| BindError::listener_failed(event, &e))?;

    // Keep closure alive
    closure.forget();

    Ok(())
}

/// Set an inline style property. Elements without inline style (SVG and
/// friends) are left untouched.
///
/// # Errors
///
/// Returns an error if the browser rejects the property
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style()
        .set_property(property, value)
        .map_err(|e| BindError::style_failed(property, &e))
}

/// # Errors
///
/// Returns an error if the class list rejects the token
pub fn add_class(element: &Element, class: &str) -> Result<()> {
    element
        .class_list()
        .add_1(class)
        .map_err(|e| BindError::ClassListFailed(format!("{e:?}")))
}

/// # Errors
///
/// Returns an error if the class list rejects the token
pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    element
        .class_list()
        .remove_1(class)
        .map_err(|e| BindError::ClassListFailed(format!("{e:?}")))
}

/// Toggle `class`, returning whether it is now present.
///
/// # Errors
///
/// Returns an error if the class list rejects the token
pub fn toggle_class(element: &Element, class: &str) -> Result<bool> {
    element
        .class_list()
        .toggle(class)
        .map_err(|e| BindError::ClassListFailed(format!("{e:?}")))
}

/// Current vertical scroll offset of the page.
///
/// # Errors
///
/// Returns an error if the offset cannot be read
pub fn scroll_y(window: &Window) -> Result<f64> {
    window
        .scroll_y()
        .map_err(|e| BindError::ScrollFailed(format!("{e:?}")))
}

/// Log a failure from inside an event callback, where there is no caller to
/// propagate to.
pub fn log_failure<T>(context: &str, result: Result<T>) {
    if let Err(e) = result {
        web_sys::console::error_1(&format!("{context}: {e}").into());
    }
}
