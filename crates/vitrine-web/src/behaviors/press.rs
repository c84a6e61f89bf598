//! Press feedback for generic buttons

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use vitrine_core::behavior::press_transform;
use vitrine_core::config::PressConfig;
use web_sys::Document;

use crate::dom;
use crate::error::Result;
use crate::selectors::BUTTON;

/// Briefly shrink a button when clicked, then restore it.
///
/// A click during the restore delay pushes the restore back.
///
/// # Errors
///
/// Returns an error if a click listener cannot be attached
pub fn bind(document: &Document, config: PressConfig) -> Result<bool> {
    let buttons = dom::query_all(document, BUTTON);
    if buttons.is_empty() {
        return Ok(false);
    }

    let pressed = press_transform(config.scale);
    for button in buttons {
        let restore: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let target = button.clone();
        let pressed = pressed.clone();

        dom::listen(&button, "click", move |_| {
            dom::log_failure("press", dom::set_style(&target, "transform", &pressed));

            let released = target.clone();
            let timeout = Timeout::new(config.restore_ms, move || {
                dom::log_failure("press", dom::set_style(&released, "transform", ""));
            });
            let previous = restore.borrow_mut().replace(timeout);
            drop(previous);
        })?;
    }

    Ok(true)
}
