//! Floating action button that hides while the visitor scrolls down.

/// Whether the floating button is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabVisibility {
    Shown,
    Hidden,
}

impl FabVisibility {
    /// CSS transform realising this visibility.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(100px)",
        }
    }
}

/// Tracks the last scroll offset seen so each event can tell its direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatingButton {
    last_offset: f64,
}

impl FloatingButton {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_offset: 0.0 }
    }

    /// Record a scroll offset. Scrolling down hides the button; scrolling up
    /// or not moving shows it.
    pub fn observe(&mut self, offset: f64) -> FabVisibility {
        let visibility = if offset > self.last_offset {
            FabVisibility::Hidden
        } else {
            FabVisibility::Shown
        };
        self.last_offset = offset;
        visibility
    }
}
