//! Image carousel state machine.
//!
//! Owns slide position and autoplay state for one carousel container. Every
//! operation returns the [`Command`]s the host must apply; nothing here
//! touches the DOM or schedules timers itself.
//!
//! # Example
//!
//! ```
//! use vitrine_core::carousel::{Carousel, Command, MarkupSummary};
//! use vitrine_core::config::CarouselConfig;
//!
//! let markup = MarkupSummary { slides: 3, indicators: 3, has_prev: true, has_next: true };
//! let mut carousel = Carousel::from_markup(markup, CarouselConfig::default())?;
//!
//! let commands = carousel.next_slide();
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(commands[0], Command::Translate { index: 1 });
//! # Ok::<(), vitrine_core::error::CarouselError>(())
//! ```

mod command;
mod playback;

pub use command::{Command, translate_x};
pub use playback::{Playback, PlaybackEvent, Step, Timing};

use std::num::NonZeroUsize;

use crate::config::CarouselConfig;
use crate::error::CarouselError;

/// What the host found inside a carousel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkupSummary {
    pub slides: usize,
    pub indicators: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Direction of a recognised swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left; shows the next slide
    Left,
    /// Finger moved left to right; shows the previous slide
    Right,
}

/// Classify a horizontal gesture.
///
/// Displacements of `threshold` or less are a dead zone so a tap never
/// navigates.
#[must_use]
pub fn swipe_direction(start_x: f64, end_x: f64, threshold: f64) -> Option<Swipe> {
    if start_x - end_x > threshold {
        Some(Swipe::Left)
    } else if end_x - start_x > threshold {
        Some(Swipe::Right)
    } else {
        None
    }
}

/// Wrap a requested slide index into `[0, count)`.
///
/// Past the end goes back to the first slide, before the start goes to the
/// last one. This is a wrap to the opposite end, not a modulo.
///
/// ```
/// use std::num::NonZeroUsize;
/// use vitrine_core::carousel::wrap_index;
///
/// let five = NonZeroUsize::new(5).ok_or("zero")?;
/// assert_eq!(wrap_index(5, five), 0);
/// assert_eq!(wrap_index(-1, five), 4);
/// assert_eq!(wrap_index(2, five), 2);
/// # Ok::<(), &str>(())
/// ```
#[must_use]
pub fn wrap_index(index: isize, count: NonZeroUsize) -> usize {
    match usize::try_from(index) {
        Ok(i) if i < count.get() => i,
        Ok(_) => 0,
        Err(_) => count.get().saturating_sub(1),
    }
}

/// State for one live carousel.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: NonZeroUsize,
    indicator_count: usize,
    current: usize,
    playback: Playback,
    generation: u64,
    touch_start_x: Option<f64>,
    config: CarouselConfig,
}

impl Carousel {
    /// Bring a carousel to life from what its container holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the container has no slides or lacks either
    /// navigation control. Callers leave such markup inert.
    pub fn from_markup(
        markup: MarkupSummary,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let slide_count = NonZeroUsize::new(markup.slides).ok_or(CarouselError::NoSlides)?;
        if !markup.has_prev {
            return Err(CarouselError::MissingPrevControl);
        }
        if !markup.has_next {
            return Err(CarouselError::MissingNextControl);
        }

        tracing::debug!(
            slides = slide_count.get(),
            indicators = markup.indicators,
            "carousel bound"
        );

        Ok(Self {
            slide_count,
            indicator_count: markup.indicators,
            current: 0,
            playback: Playback::Idle,
            generation: 0,
            touch_start_x: None,
            config,
        })
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count.get()
    }

    #[must_use]
    pub const fn playback(&self) -> Playback {
        self.playback
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    #[must_use]
    pub const fn autoplay_timer_active(&self) -> bool {
        self.playback.timer_active()
    }

    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether each indicator, in document order, should be marked active.
    pub fn indicator_states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.indicator_count).map(move |i| i == self.current)
    }

    /// Show the slide at `index`, wrapping out-of-range values.
    pub fn show_slide(&mut self, index: isize) -> Vec<Command> {
        self.current = wrap_index(index, self.slide_count);
        tracing::trace!(index = self.current, "show slide");

        let mut commands = vec![Command::Translate {
            index: self.current,
        }];
        commands.extend(self.update_indicators());
        commands
    }

    /// Advance one slide and start the post-interaction cooldown.
    pub fn next_slide(&mut self) -> Vec<Command> {
        let mut commands = self.show_slide(self.offset(1));
        commands.extend(self.reset_autoplay());
        commands
    }

    /// Go back one slide and start the post-interaction cooldown.
    pub fn prev_slide(&mut self) -> Vec<Command> {
        let mut commands = self.show_slide(self.offset(-1));
        commands.extend(self.reset_autoplay());
        commands
    }

    /// Jump to an absolute slide and start the post-interaction cooldown.
    pub fn go_to_slide(&mut self, index: usize) -> Vec<Command> {
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        let mut commands = self.show_slide(index);
        commands.extend(self.reset_autoplay());
        commands
    }

    /// Highlight the indicator for the current slide. Empty when the
    /// carousel has no indicators.
    #[must_use]
    pub fn update_indicators(&self) -> Vec<Command> {
        if self.indicator_count == 0 {
            return Vec::new();
        }
        vec![Command::HighlightIndicator {
            active: self.current,
        }]
    }

    /// Navigate if the gesture from `start_x` to `end_x` is a swipe.
    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) -> Vec<Command> {
        match swipe_direction(start_x, end_x, self.config.swipe_threshold) {
            Some(Swipe::Left) => self.next_slide(),
            Some(Swipe::Right) => self.prev_slide(),
            None => Vec::new(),
        }
    }

    /// Start the repeating autoplay timer unless one is already active.
    pub fn start_autoplay(&mut self) -> Vec<Command> {
        self.apply(PlaybackEvent::Start)
    }

    /// One autoplay tick. Ignored while paused or cooling down.
    pub fn tick(&mut self) -> Vec<Command> {
        self.apply(PlaybackEvent::Tick)
    }

    pub fn pointer_enter(&mut self) -> Vec<Command> {
        self.apply(PlaybackEvent::PointerEnter)
    }

    pub fn pointer_leave(&mut self) -> Vec<Command> {
        self.apply(PlaybackEvent::PointerLeave)
    }

    /// A finger landed at horizontal position `x`.
    pub fn touch_start(&mut self, x: f64) -> Vec<Command> {
        self.touch_start_x = Some(x);
        self.apply(PlaybackEvent::TouchStart)
    }

    /// A finger lifted at horizontal position `x`.
    ///
    /// A swipe navigates (and cools down); anything else resumes after the
    /// cooldown delay.
    pub fn touch_end(&mut self, x: f64) -> Vec<Command> {
        let commands = self
            .touch_start_x
            .take()
            .map(|start_x| self.handle_swipe(start_x, x))
            .unwrap_or_default();

        if commands.is_empty() {
            self.apply(PlaybackEvent::TouchRelease)
        } else {
            commands
        }
    }

    /// The delayed wake tagged `generation` fired.
    pub fn wake(&mut self, generation: u64) -> Vec<Command> {
        self.apply(PlaybackEvent::Wake { generation })
    }

    fn reset_autoplay(&mut self) -> Vec<Command> {
        self.apply(PlaybackEvent::Interaction)
    }

    fn apply(&mut self, event: PlaybackEvent) -> Vec<Command> {
        let timing = Timing {
            interval_ms: self.config.autoplay_interval_ms,
            cooldown_ms: self.config.cooldown_ms,
            next_generation: self.generation.wrapping_add(1),
        };
        let step = self.playback.step(event, timing);

        if let Playback::Cooldown { generation, .. } = step.state {
            self.generation = generation;
        }
        if step.state != self.playback {
            tracing::trace!(from = ?self.playback, to = ?step.state, ?event, "playback transition");
        }
        self.playback = step.state;

        let mut commands = step.commands;
        if step.advance {
            commands.extend(self.show_slide(self.offset(1)));
        }
        commands
    }

    fn offset(&self, delta: isize) -> isize {
        isize::try_from(self.current)
            .map_or(isize::MAX, |current| current.saturating_add(delta))
    }
}
