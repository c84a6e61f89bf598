//! Page behaviors against real markup
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox crates/vitrine-web

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use gloo_timers::future::TimeoutFuture;
use vitrine_core::behavior::{HeaderStyle, RevealStyle};
use vitrine_core::SiteConfig;
use vitrine_core::config::{PressConfig, ScrollConfig, TypewriterConfig};
use vitrine_web::behaviors::{footer, header, menu, press, reveal, typewriter};
use vitrine_web::{config, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::document().expect("should have document")
}

fn fixture(markup: &str) -> Element {
    let document = document();
    let wrapper = document.create_element("div").unwrap();
    wrapper.set_inner_html(markup);
    document.body().unwrap().append_child(&wrapper).unwrap();
    wrapper
}

fn style(element: &Element, property: &str) -> String {
    element
        .unchecked_ref::<HtmlElement>()
        .style()
        .get_property_value(property)
        .unwrap()
}

#[wasm_bindgen_test]
fn test_menu_toggle_opens_and_link_closes() {
    let wrapper = fixture(
        r##"<button class="menu-toggle">menu</button>
            <ul class="nav-links"><li><a href="#servicos">Serviços</a></li></ul>"##,
    );
    let document = document();

    assert!(menu::bind(&document).unwrap());

    let toggle = dom::query(&document, ".menu-toggle").unwrap();
    let panel = dom::query(&document, ".nav-links").unwrap();

    toggle.unchecked_ref::<HtmlElement>().click();
    assert!(panel.class_list().contains("active"));

    dom::query(&document, ".nav-links a")
        .unwrap()
        .unchecked_ref::<HtmlElement>()
        .click();
    assert!(!panel.class_list().contains("active"));

    wrapper.remove();
}

#[wasm_bindgen_test]
fn test_footer_shows_current_year() {
    let wrapper = fixture(r#"<span id="current-year"></span>"#);
    let document = document();

    assert!(footer::bind(&document).unwrap());

    let year = js_sys::Date::new_0().get_full_year().to_string();
    let span = dom::query(&document, "#current-year").unwrap();
    assert_eq!(span.text_content().unwrap(), year);

    wrapper.remove();
}

#[wasm_bindgen_test]
fn test_header_restyles_across_threshold() {
    let wrapper = fixture(r#"<nav class="navbar"></nav>"#);
    let header = dom::query_in(&wrapper, ".navbar").unwrap();

    let style_at_150 = header::restyle(&header, 150.0, 100.0).unwrap();
    assert_eq!(style_at_150, HeaderStyle::Scrolled);
    assert_eq!(style(&header, "padding"), "15px 5%");

    let style_at_0 = header::restyle(&header, 0.0, 100.0).unwrap();
    assert_eq!(style_at_0, HeaderStyle::Resting);
    assert_eq!(style(&header, "box-shadow"), "none");
    assert_eq!(style(&header, "padding"), "20px 5%");

    wrapper.remove();
}

#[wasm_bindgen_test]
fn test_reveal_apply_sets_opacity_and_offset() {
    let wrapper = fixture(r#"<div class="servico-card"></div>"#);
    let card = dom::query_in(&wrapper, ".servico-card").unwrap();

    reveal::apply(&card, RevealStyle::Hidden).unwrap();
    assert_eq!(style(&card, "opacity"), "0");
    assert_eq!(style(&card, "transform"), "translateY(20px)");

    reveal::apply(&card, RevealStyle::Revealed).unwrap();
    assert_eq!(style(&card, "opacity"), "1");
    assert_ne!(style(&card, "transform"), "translateY(20px)");

    wrapper.remove();
}

#[wasm_bindgen_test]
async fn test_press_feedback_restores_after_delay() {
    let wrapper = fixture(r#"<button class="btn">Orçamento</button>"#);
    let document = document();
    let config = PressConfig {
        restore_ms: 20,
        ..PressConfig::default()
    };

    assert!(press::bind(&document, config).unwrap());

    let button = dom::query_in(&wrapper, ".btn").unwrap();
    button.unchecked_ref::<HtmlElement>().click();
    assert_eq!(style(&button, "transform"), "scale(0.95)");

    TimeoutFuture::new(60).await;
    assert_eq!(style(&button, "transform"), "");

    wrapper.remove();
}

#[wasm_bindgen_test]
async fn test_typewriter_retypes_hero_heading() {
    let wrapper = fixture(r#"<section class="hero"><h2>Olá</h2></section>"#);
    let document = document();
    let config = TypewriterConfig {
        interval_ms: 5,
        start_delay_ms: 5,
    };

    assert!(typewriter::bind(&document, config).unwrap());

    let heading = dom::query_in(&wrapper, ".hero h2").unwrap();
    assert_eq!(heading.text_content().unwrap(), "");

    TimeoutFuture::new(200).await;
    assert_eq!(heading.text_content().unwrap(), "Olá");

    wrapper.remove();
}

#[wasm_bindgen_test]
fn test_missing_markup_is_skipped() {
    let document = document();

    assert!(!footer::bind(&document).unwrap());
    assert!(!header::bind(&document, ScrollConfig::default()).unwrap());
}

#[wasm_bindgen_test]
fn test_embedded_config_overrides_defaults() {
    let wrapper = fixture(
        r#"<script type="application/json" id="vitrine-config">
            {"carousel": {"cooldown_ms": 1000}}
        </script>"#,
    );

    let loaded = config::load(&document());
    assert_eq!(loaded.carousel.cooldown_ms, 1000);
    assert_eq!(loaded.carousel.autoplay_interval_ms, 5000);

    wrapper.remove();
}

#[wasm_bindgen_test]
fn test_invalid_embedded_config_falls_back_to_defaults() {
    let wrapper = fixture(
        r#"<script type="application/json" id="vitrine-config">
            {"typewriter": {"interval_ms": 0}}
        </script>"#,
    );

    assert_eq!(config::load(&document()), SiteConfig::default());

    wrapper.remove();
}

#[wasm_bindgen_test]
fn test_absent_config_uses_defaults() {
    assert_eq!(config::load(&document()), SiteConfig::default());
}

#[wasm_bindgen_test]
fn test_start_binds_immediately_once_document_is_parsed() {
    assert_ne!(document().ready_state(), "loading");
    assert!(vitrine_web::start().is_ok());
}
