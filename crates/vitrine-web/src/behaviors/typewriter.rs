//! Typewriter effect on the hero heading

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use vitrine_core::behavior::Typewriter;
use vitrine_core::config::TypewriterConfig;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::Result;
use crate::selectors::HERO_HEADING;

/// Clear the hero heading and type it back in, one character per tick.
///
/// # Errors
///
/// Never fails today; the signature matches the other bindings
pub fn bind(document: &Document, config: TypewriterConfig) -> Result<bool> {
    let Some(heading) = dom::query(document, HERO_HEADING) else {
        return Ok(false);
    };

    let text = heading.text_content().unwrap_or_default();
    heading.set_text_content(Some(""));

    let typewriter = Rc::new(RefCell::new(Typewriter::new(&text)));
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();

    let start = Timeout::new(config.start_delay_ms, move || {
        if !type_next(&heading, &typewriter) {
            return;
        }
        let slot = Rc::clone(&ticker);
        let interval = Interval::new(config.interval_ms, move || {
            if !type_next(&heading, &typewriter) {
                // Finished: dropping the interval stops it
                slot.borrow_mut().take();
            }
        });
        *ticker.borrow_mut() = Some(interval);
    });
    start.forget();

    Ok(true)
}

fn type_next(heading: &Element, typewriter: &RefCell<Typewriter>) -> bool {
    let mut typewriter = typewriter.borrow_mut();
    if !typewriter.tick() {
        return false;
    }
    heading.set_text_content(Some(&typewriter.displayed()));
    true
}
