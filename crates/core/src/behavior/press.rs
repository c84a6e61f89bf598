//! Tactile press cue for generic buttons.

/// Transform applied while a button is pressed.
///
/// ```
/// use vitrine_core::behavior::press_transform;
///
/// assert_eq!(press_transform(0.95), "scale(0.95)");
/// ```
#[must_use]
pub fn press_transform(scale: f64) -> String {
    format!("scale({scale})")
}
