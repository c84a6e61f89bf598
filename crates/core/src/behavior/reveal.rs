//! Fade-and-slide reveal of content blocks entering the viewport.

use crate::config::RevealConfig;

/// Inline styles for the two reveal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    /// Before the element has been seen
    Hidden,
    /// After its first intersection
    Revealed,
}

impl RevealStyle {
    pub const TRANSITION: &'static str = "opacity 0.5s ease, transform 0.5s ease";

    #[must_use]
    pub const fn opacity(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Revealed => "1",
        }
    }

    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Hidden => "translateY(20px)",
            Self::Revealed => "translateY(0)",
        }
    }
}

impl RevealConfig {
    /// Observer root margin in CSS shorthand (top right bottom left).
    ///
    /// ```
    /// use vitrine_core::config::RevealConfig;
    ///
    /// assert_eq!(RevealConfig::default().root_margin(), "0px 0px -50px 0px");
    /// ```
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin)
    }
}
