//! Side effects requested by the carousel state machine.
//!
//! The state machine never touches the DOM or the clock. Every operation
//! returns the commands the host must carry out, in order.

/// One side effect for the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the slide track so the slide at `index` is in view
    Translate { index: usize },
    /// Mark the indicator at `active` and clear every other one
    HighlightIndicator { active: usize },
    /// Schedule the repeating autoplay tick
    StartAutoplay { interval_ms: u32 },
    /// Cancel the repeating autoplay tick
    CancelAutoplay,
    /// Schedule the single delayed wake, replacing any pending one
    ScheduleWake { delay_ms: u32, generation: u64 },
    /// Drop the pending wake, if any
    CancelWake,
}

/// CSS transform placing the slide at `index` in view.
///
/// # Example
///
/// ```
/// use vitrine_core::carousel::translate_x;
///
/// assert_eq!(translate_x(0), "translateX(-0%)");
/// assert_eq!(translate_x(3), "translateX(-300%)");
/// ```
#[must_use]
pub fn translate_x(index: usize) -> String {
    format!("translateX(-{}%)", index.saturating_mul(100))
}
