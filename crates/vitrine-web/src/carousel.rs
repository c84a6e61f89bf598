//! Carousel widget binding
//!
//! Finds the carousel's parts once, wires its events to the
//! [`vitrine_core::Carousel`] state machine, and carries out the commands it
//! returns. This is the imperative shell: all decisions live in the core.
//!
//! Timers follow the state machine's single-slot contract: one autoplay
//! `Interval`, one wake `Timeout`. Replacing or taking a handle drops it, and
//! dropping a gloo-timers handle cancels the browser timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use vitrine_core::carousel::{Carousel, Command, MarkupSummary, Playback, translate_x};
use vitrine_core::config::CarouselConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, TouchEvent};

use crate::dom;
use crate::error::Result;
use crate::selectors;

/// Element handles found inside one carousel container.
#[derive(Debug, Clone)]
pub struct CarouselElements {
    pub container: Element,
    pub track: Option<Element>,
    pub slides: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
    pub indicators: Vec<Element>,
}

impl CarouselElements {
    /// Look up every part of the carousel under `container`.
    #[must_use]
    pub fn discover(container: &Element) -> Self {
        Self {
            container: container.clone(),
            track: dom::query_in(container, selectors::CAROUSEL_TRACK),
            slides: dom::query_all_in(container, selectors::CAROUSEL_SLIDE),
            prev: dom::query_in(container, selectors::PREV_CONTROL),
            next: dom::query_in(container, selectors::NEXT_CONTROL),
            indicators: dom::query_all_in(container, selectors::INDICATOR),
        }
    }

    #[must_use]
    pub fn summary(&self) -> MarkupSummary {
        MarkupSummary {
            slides: self.slides.len(),
            indicators: self.indicators.len(),
            has_prev: self.prev.is_some(),
            has_next: self.next.is_some(),
        }
    }
}

struct Widget {
    carousel: Carousel,
    track: Option<Element>,
    indicators: Vec<Element>,
    autoplay: Option<Interval>,
    wake: Option<Timeout>,
}

/// Handle to a live carousel.
///
/// Clones share the same widget. Event listeners hold their own clone, so
/// the widget lives as long as the page even if every handle is dropped.
#[derive(Clone)]
pub struct CarouselHandle {
    inner: Rc<RefCell<Widget>>,
}

impl CarouselHandle {
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.borrow().carousel.current_index()
    }

    #[must_use]
    pub fn playback(&self) -> Playback {
        self.inner.borrow().carousel.playback()
    }

    /// Whether a browser interval is currently scheduled for autoplay.
    #[must_use]
    pub fn autoplay_scheduled(&self) -> bool {
        self.inner.borrow().autoplay.is_some()
    }

    /// Run one carousel operation, then carry out its commands.
    ///
    /// The widget borrow is released before any command runs, so commands
    /// are free to schedule callbacks that dispatch again.
    pub fn dispatch<F>(&self, operation: F)
    where
        F: FnOnce(&mut Carousel) -> Vec<Command>,
    {
        let commands = operation(&mut self.inner.borrow_mut().carousel);
        for command in commands {
            dom::log_failure("carousel", self.execute(command));
        }
    }

    fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::Translate { index } => {
                let widget = self.inner.borrow();
                if let Some(track) = &widget.track {
                    dom::set_style(track, "transform", &translate_x(index))?;
                }
            }
            Command::HighlightIndicator { active } => {
                let widget = self.inner.borrow();
                for (i, indicator) in widget.indicators.iter().enumerate() {
                    if i == active {
                        dom::add_class(indicator, selectors::ACTIVE_CLASS)?;
                    } else {
                        dom::remove_class(indicator, selectors::ACTIVE_CLASS)?;
                    }
                }
            }
            Command::StartAutoplay { interval_ms } => {
                let weak = Rc::downgrade(&self.inner);
                let interval = Interval::new(interval_ms, move || {
                    with_widget(&weak, |handle| handle.dispatch(Carousel::tick));
                });
                self.inner.borrow_mut().autoplay = Some(interval);
            }
            Command::CancelAutoplay => {
                let cancelled = self.inner.borrow_mut().autoplay.take();
                drop(cancelled);
            }
            Command::ScheduleWake {
                delay_ms,
                generation,
            } => {
                let weak = Rc::downgrade(&self.inner);
                let timeout = Timeout::new(delay_ms, move || {
                    with_widget(&weak, |handle| handle.dispatch(|c| c.wake(generation)));
                });
                let replaced = self.inner.borrow_mut().wake.replace(timeout);
                drop(replaced);
            }
            Command::CancelWake => {
                let cancelled = self.inner.borrow_mut().wake.take();
                drop(cancelled);
            }
        }
        Ok(())
    }

    fn wire(&self, elements: &CarouselElements, prev: &Element, next: &Element) -> Result<()> {
        let handle = self.clone();
        dom::listen(prev, "click", move |_| handle.dispatch(Carousel::prev_slide))?;

        let handle = self.clone();
        dom::listen(next, "click", move |_| handle.dispatch(Carousel::next_slide))?;

        for (index, indicator) in elements.indicators.iter().enumerate() {
            let handle = self.clone();
            dom::listen(indicator, "click", move |_| {
                handle.dispatch(|c| c.go_to_slide(index));
            })?;
        }

        let container = &elements.container;

        let handle = self.clone();
        dom::listen(container, "mouseenter", move |_| {
            handle.dispatch(Carousel::pointer_enter);
        })?;

        let handle = self.clone();
        dom::listen(container, "mouseleave", move |_| {
            handle.dispatch(Carousel::pointer_leave);
        })?;

        let handle = self.clone();
        dom::listen(container, "touchstart", move |event| {
            if let Some(x) = touch_x(&event) {
                handle.dispatch(|c| c.touch_start(x));
            }
        })?;

        let handle = self.clone();
        dom::listen(container, "touchend", move |event| {
            if let Some(x) = touch_x(&event) {
                handle.dispatch(|c| c.touch_end(x));
            }
        })?;

        Ok(())
    }
}

fn with_widget(weak: &Weak<RefCell<Widget>>, f: impl FnOnce(&CarouselHandle)) {
    if let Some(inner) = weak.upgrade() {
        f(&CarouselHandle { inner });
    }
}

/// Horizontal screen position of the touch that changed in `event`.
fn touch_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch_event| touch_event.changed_touches().get(0))
        .map(|touch| f64::from(touch.screen_x()))
}

/// Bring the carousel inside `container` to life.
///
/// Returns `Ok(None)` and leaves the markup untouched when the container
/// lacks slides or either navigation control.
///
/// # Errors
///
/// Returns an error if the browser rejects one of the event listeners
pub fn mount(container: &Element, config: CarouselConfig) -> Result<Option<CarouselHandle>> {
    let elements = CarouselElements::discover(container);

    let carousel = match Carousel::from_markup(elements.summary(), config) {
        Ok(carousel) => carousel,
        Err(reason) => {
            web_sys::console::debug_1(&format!("Carousel left inert: {reason}").into());
            return Ok(None);
        }
    };

    let (Some(prev), Some(next)) = (&elements.prev, &elements.next) else {
        return Ok(None);
    };

    let handle = CarouselHandle {
        inner: Rc::new(RefCell::new(Widget {
            carousel,
            track: elements.track.clone(),
            indicators: elements.indicators.clone(),
            autoplay: None,
            wake: None,
        })),
    };

    handle.wire(&elements, prev, next)?;
    handle.dispatch(Carousel::start_autoplay);
    handle.dispatch(|c| c.update_indicators());

    Ok(Some(handle))
}
