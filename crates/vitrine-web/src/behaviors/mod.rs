//! Independent page behaviors
//!
//! Each `bind` attaches one behavior once at page load and returns
//! `Ok(false)` when its markup is absent. Behaviors share no state with each
//! other or with the carousel.

pub mod anchors;
pub mod fab;
pub mod footer;
pub mod header;
pub mod menu;
pub mod press;
pub mod reveal;
pub mod typewriter;
