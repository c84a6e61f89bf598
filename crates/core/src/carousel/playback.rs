//! Autoplay state machine.
//!
//! Pausing and cooling down are two different things. Hovering or touching
//! pauses: the autoplay timer keeps running and its ticks are ignored, so the
//! rotation phase is preserved. A manual navigation cools down: the timer is
//! cancelled outright and a fresh one starts once the quiet window ends.
//!
//! | state                    | paused | timer active |
//! |--------------------------|--------|--------------|
//! | `Idle`                   | no     | no           |
//! | `Playing`                | no     | yes          |
//! | `Paused`                 | yes    | yes          |
//! | `Cooldown { restart }`   | yes    | `!restart`   |

use super::command::Command;

/// Where the carousel's autoplay currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// Autoplay never started
    #[default]
    Idle,
    /// Timer running, ticks advance the carousel
    Playing,
    /// Timer running, ticks ignored while the pointer or a finger is on the widget
    Paused,
    /// Waiting for the wake tagged `generation`; `restart` means the timer was
    /// cancelled and must be started again on wake
    Cooldown { restart: bool, generation: u64 },
}

/// Inputs driving the playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Start,
    Tick,
    PointerEnter,
    PointerLeave,
    TouchStart,
    /// A touch ended without navigating
    TouchRelease,
    /// Button, indicator or swipe navigation
    Interaction,
    Wake { generation: u64 },
}

/// Timing facts a transition may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub interval_ms: u32,
    pub cooldown_ms: u32,
    /// Tag to use if this transition schedules a wake
    pub next_generation: u64,
}

/// Outcome of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: Playback,
    pub commands: Vec<Command>,
    /// Whether the carousel should advance one slide
    pub advance: bool,
}

impl Step {
    const fn stay(state: Playback) -> Self {
        Self {
            state,
            commands: Vec::new(),
            advance: false,
        }
    }

    fn to(state: Playback, commands: Vec<Command>) -> Self {
        Self {
            state,
            commands,
            advance: false,
        }
    }
}

impl Playback {
    /// True while ticks are suppressed.
    #[must_use]
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused | Self::Cooldown { .. })
    }

    /// True while a repeating autoplay timer is scheduled.
    #[must_use]
    pub const fn timer_active(self) -> bool {
        match self {
            Self::Idle => false,
            Self::Playing | Self::Paused => true,
            Self::Cooldown { restart, .. } => !restart,
        }
    }

    /// Apply one event and return the resulting state plus its side effects.
    #[must_use]
    pub fn step(self, event: PlaybackEvent, timing: Timing) -> Step {
        let start = Command::StartAutoplay {
            interval_ms: timing.interval_ms,
        };
        let wake = Command::ScheduleWake {
            delay_ms: timing.cooldown_ms,
            generation: timing.next_generation,
        };

        match (self, event) {
            (Self::Idle, PlaybackEvent::Start) => Step::to(Self::Playing, vec![start]),
            (Self::Cooldown { restart: true, .. }, PlaybackEvent::Start) => {
                Step::to(Self::Playing, vec![Command::CancelWake, start])
            }

            (Self::Playing, PlaybackEvent::Tick) => Step {
                state: Self::Playing,
                commands: Vec::new(),
                advance: true,
            },

            (Self::Playing, PlaybackEvent::PointerEnter | PlaybackEvent::TouchStart) => {
                Step::stay(Self::Paused)
            }
            (Self::Paused, PlaybackEvent::PointerLeave) => Step::stay(Self::Playing),
            // Timer still live after a tap, so leaving resumes at once and the
            // pending wake goes stale
            (Self::Cooldown { restart: false, .. }, PlaybackEvent::PointerLeave) => {
                Step::stay(Self::Playing)
            }

            (state, PlaybackEvent::Interaction) => {
                let mut commands = Vec::with_capacity(2);
                if state.timer_active() {
                    commands.push(Command::CancelAutoplay);
                }
                commands.push(wake);
                Step::to(
                    Self::Cooldown {
                        restart: true,
                        generation: timing.next_generation,
                    },
                    commands,
                )
            }

            (Self::Paused, PlaybackEvent::TouchRelease) => Step::to(
                Self::Cooldown {
                    restart: false,
                    generation: timing.next_generation,
                },
                vec![wake],
            ),
            (Self::Cooldown { restart, .. }, PlaybackEvent::TouchRelease) => Step::to(
                Self::Cooldown {
                    restart,
                    generation: timing.next_generation,
                },
                vec![wake],
            ),

            (
                Self::Cooldown {
                    restart,
                    generation,
                },
                PlaybackEvent::Wake { generation: fired },
            ) if generation == fired => {
                let commands = if restart { vec![start] } else { Vec::new() };
                Step::to(Self::Playing, commands)
            }

            (state, _) => Step::stay(state),
        }
    }
}
