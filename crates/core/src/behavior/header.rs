//! Header styling driven by vertical scroll position.

/// The two looks of the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// At or near the top of the page
    Resting,
    /// Scrolled past the threshold: compact with a drop shadow
    Scrolled,
}

impl HeaderStyle {
    /// Style for a given vertical scroll offset. The threshold itself still
    /// counts as resting.
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Resting
        }
    }

    #[must_use]
    pub const fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => "none",
            Self::Scrolled => "0 2px 10px rgba(0, 0, 0, 0.1)",
        }
    }

    #[must_use]
    pub const fn padding(self) -> &'static str {
        match self {
            Self::Resting => "20px 5%",
            Self::Scrolled => "15px 5%",
        }
    }
}
