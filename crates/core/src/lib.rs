//! Pure logic behind the vitrine site scripts.
//!
//! Nothing in this crate touches the DOM or a clock. The browser layer
//! (`vitrine-web`) feeds events in and applies the results.
//!
//! ## Module Structure
//! - `carousel`: slide position and autoplay state machine
//! - `behavior`: decision rules for the independent page behaviors
//! - `config`: tunable parameters with site defaults
//! - `error`: typed errors

#![forbid(unsafe_code)]

pub mod behavior;
pub mod carousel;
pub mod config;
pub mod error;

pub use carousel::{Carousel, Command, MarkupSummary, Playback};
pub use config::SiteConfig;
pub use error::{CarouselError, ConfigError};

#[cfg(test)]
mod tests;
