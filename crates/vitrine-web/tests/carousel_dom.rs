//! Carousel binding against real markup
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox crates/vitrine-web

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use vitrine_core::Playback;
use vitrine_core::config::CarouselConfig;
use vitrine_web::{carousel, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, Touch, TouchEvent, TouchEventInit, TouchInit};

wasm_bindgen_test_configure!(run_in_browser);

const CAROUSEL_MARKUP: &str = r#"
    <div class="carousel-slides">
        <div class="carousel-slide">one</div>
        <div class="carousel-slide">two</div>
        <div class="carousel-slide">three</div>
    </div>
    <button class="prev-btn">prev</button>
    <button class="next-btn">next</button>
    <div class="carousel-indicators">
        <span class="indicator"></span>
        <span class="indicator"></span>
        <span class="indicator"></span>
    </div>
"#;

/// Autoplay slow enough that no tick fires while a test runs
fn quiet_config() -> CarouselConfig {
    CarouselConfig {
        autoplay_interval_ms: 600_000,
        ..CarouselConfig::default()
    }
}

fn fixture(markup: &str) -> Element {
    let document = dom::document().expect("should have document");
    let container = document.create_element("div").unwrap();
    container.set_class_name("carousel-container");
    container.set_inner_html(markup);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn click(container: &Element, selector: &str) {
    dom::query_in(container, selector)
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .click();
}

fn track_transform(container: &Element) -> String {
    dom::query_in(container, ".carousel-slides")
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .style()
        .get_property_value("transform")
        .unwrap()
}

fn active_indicators(container: &Element) -> Vec<usize> {
    dom::query_all_in(container, ".indicator")
        .iter()
        .enumerate()
        .filter(|(_, indicator)| indicator.class_list().contains("active"))
        .map(|(i, _)| i)
        .collect()
}

#[wasm_bindgen_test]
fn test_mount_highlights_first_indicator_and_schedules_autoplay() {
    let container = fixture(CAROUSEL_MARKUP);

    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    assert_eq!(handle.current_index(), 0);
    assert_eq!(handle.playback(), Playback::Playing);
    assert!(handle.autoplay_scheduled());
    assert_eq!(active_indicators(&container), vec![0]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_next_button_wraps_after_last_slide() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    click(&container, ".next-btn");
    assert_eq!(track_transform(&container), "translateX(-100%)");
    assert_eq!(active_indicators(&container), vec![1]);

    click(&container, ".next-btn");
    click(&container, ".next-btn");
    assert_eq!(handle.current_index(), 0);
    assert_ne!(track_transform(&container), "translateX(-200%)");
    assert_eq!(active_indicators(&container), vec![0]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_prev_button_wraps_to_last_slide() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    click(&container, ".prev-btn");

    assert_eq!(handle.current_index(), 2);
    assert_eq!(active_indicators(&container), vec![2]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_navigation_cancels_autoplay_until_cooldown_ends() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    click(&container, ".next-btn");

    assert!(!handle.autoplay_scheduled());
    assert!(matches!(
        handle.playback(),
        Playback::Cooldown { restart: true, .. }
    ));

    container.remove();
}

#[wasm_bindgen_test]
fn test_indicator_click_jumps_to_slide() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    dom::query_all_in(&container, ".indicator")
        .get(2)
        .unwrap()
        .unchecked_ref::<HtmlElement>()
        .click();

    assert_eq!(handle.current_index(), 2);
    assert_eq!(track_transform(&container), "translateX(-200%)");

    container.remove();
}

#[wasm_bindgen_test]
fn test_hover_pauses_without_cancelling_timer() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    let enter = Event::new("mouseenter").unwrap();
    container.dispatch_event(&enter).unwrap();
    assert_eq!(handle.playback(), Playback::Paused);
    assert!(handle.autoplay_scheduled());

    let leave = Event::new("mouseleave").unwrap();
    container.dispatch_event(&leave).unwrap();
    assert_eq!(handle.playback(), Playback::Playing);

    container.remove();
}

/// Touch event whose only changed touch sits at `screen_x`, or `None` when
/// the browser has no touch event support
fn touch_event(kind: &str, target: &Element, screen_x: f64) -> Option<TouchEvent> {
    let init = TouchInit::new(0, target);
    init.set_screen_x(screen_x);
    let touch = Touch::new(&init).ok()?;

    let changed = js_sys::Array::of1(&touch);
    let event_init = TouchEventInit::new();
    event_init.set_changed_touches(&changed);
    TouchEvent::new_with_event_init_dict(kind, &event_init).ok()
}

#[wasm_bindgen_test]
fn test_leftward_swipe_advances_one_slide() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    let (Some(start), Some(end)) = (
        touch_event("touchstart", &container, 300.0),
        touch_event("touchend", &container, 200.0),
    ) else {
        container.remove();
        return;
    };

    container.dispatch_event(&start).unwrap();
    assert_eq!(handle.playback(), Playback::Paused);

    container.dispatch_event(&end).unwrap();
    assert_eq!(handle.current_index(), 1);
    assert_eq!(track_transform(&container), "translateX(-100%)");
    assert!(matches!(
        handle.playback(),
        Playback::Cooldown { restart: true, .. }
    ));

    container.remove();
}

#[wasm_bindgen_test]
fn test_short_touch_resumes_without_navigating() {
    let container = fixture(CAROUSEL_MARKUP);
    let handle = carousel::mount(&container, quiet_config()).unwrap().unwrap();

    let (Some(start), Some(end)) = (
        touch_event("touchstart", &container, 200.0),
        touch_event("touchend", &container, 230.0),
    ) else {
        container.remove();
        return;
    };

    container.dispatch_event(&start).unwrap();
    container.dispatch_event(&end).unwrap();

    assert_eq!(handle.current_index(), 0);
    assert!(handle.autoplay_scheduled());
    assert!(matches!(
        handle.playback(),
        Playback::Cooldown { restart: false, .. }
    ));

    container.remove();
}

#[wasm_bindgen_test]
fn test_container_without_controls_stays_inert() {
    let container = fixture(
        r#"<div class="carousel-slides"><div class="carousel-slide">only</div></div>"#,
    );

    let handle = carousel::mount(&container, quiet_config()).unwrap();

    assert!(handle.is_none());
    assert_eq!(track_transform(&container), "");

    container.remove();
}

#[wasm_bindgen_test]
fn test_container_without_slides_stays_inert() {
    let container = fixture(r#"<button class="prev-btn"></button><button class="next-btn"></button>"#);

    assert!(carousel::mount(&container, quiet_config()).unwrap().is_none());

    container.remove();
}
