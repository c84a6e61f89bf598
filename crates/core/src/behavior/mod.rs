//! Decision rules for the stateless page behaviors.
//!
//! Each submodule answers one question the DOM layer asks on an event
//! ("which header style at this offset?", "what should the heading show
//! now?") so that the answer can be tested without a browser.

pub mod anchor;
pub mod fab;
pub mod header;
pub mod press;
pub mod reveal;
pub mod typewriter;

pub use anchor::{anchor_target, scroll_destination};
pub use fab::{FabVisibility, FloatingButton};
pub use header::HeaderStyle;
pub use press::press_transform;
pub use reveal::RevealStyle;
pub use typewriter::Typewriter;
