//! Character-by-character reveal of a heading.

/// Progress of a typewriter reveal over a fixed text.
///
/// ```
/// use vitrine_core::behavior::Typewriter;
///
/// let mut typewriter = Typewriter::new("Hi");
/// assert_eq!(typewriter.displayed(), "");
/// typewriter.tick();
/// typewriter.tick();
/// assert_eq!(typewriter.displayed(), "Hi");
/// assert!(typewriter.is_finished());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal one more character. Returns `false` once nothing was left to
    /// reveal.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.revealed = self.revealed.saturating_add(1);
        true
    }

    /// Text visible so far.
    #[must_use]
    pub fn displayed(&self) -> String {
        self.chars.iter().take(self.revealed).collect()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }
}
