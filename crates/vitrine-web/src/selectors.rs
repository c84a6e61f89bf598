//! Markup contract: the selectors and class names the site's HTML exposes.

pub const CAROUSEL_CONTAINER: &str = ".carousel-container";
pub const CAROUSEL_TRACK: &str = ".carousel-slides";
pub const CAROUSEL_SLIDE: &str = ".carousel-slide";
pub const PREV_CONTROL: &str = ".prev-btn";
pub const NEXT_CONTROL: &str = ".next-btn";
pub const INDICATOR: &str = ".indicator";

pub const MENU_TOGGLE: &str = ".menu-toggle";
pub const NAV_PANEL: &str = ".nav-links";
pub const NAV_LINK: &str = ".nav-links a";

pub const FOOTER_YEAR: &str = "#current-year";
pub const IN_PAGE_LINK: &str = "a[href^=\"#\"]";
pub const HEADER: &str = ".navbar";
pub const REVEAL_TARGETS: &str = ".servico-card, .qualidade, .galeria-item, .contato-item";
pub const HERO_HEADING: &str = ".hero h2";
pub const BUTTON: &str = ".btn";
pub const FLOATING_BUTTON: &str = ".float-whatsapp";

/// Optional `<script type="application/json">` holding configuration overrides
pub const CONFIG_SCRIPT: &str = "#vitrine-config";

/// Class marking the open menu and the current indicator
pub const ACTIVE_CLASS: &str = "active";
