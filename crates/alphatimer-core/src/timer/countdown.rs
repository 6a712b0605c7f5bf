//! Pure countdown state machine.
//!
//! The machine is clock-free: the caller (normally the [`TickSource`]
//! driver task) invokes `tick()` once per elapsed second. All transitions
//! are deterministic, so the whole countdown is unit-testable without a
//! runtime.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> start() -> Running(5..=0 over successive ticks) -> Idle
//! ```
//!
//! Completion rewinds the value to the idle sentinel; there is no terminal
//! state.
//!
//! [`TickSource`]: super::TickSource

use serde::{Deserialize, Serialize};

/// Whole seconds a countdown runs for. Doubles as the idle sentinel
/// published while no countdown is in progress.
pub const INITIAL_SECS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Idle,
    Running,
}

/// Outcome of a single `tick()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown decremented; the payload is the new remaining value.
    Tick(u8),
    /// All intervals elapsed; the value rewound to [`INITIAL_SECS`].
    Completed,
    /// The machine was idle. Ticks from a cancelled run land here.
    Noop,
}

/// One-shot 6-second countdown.
///
/// The remaining value stays in `0..=INITIAL_SECS`: `INITIAL_SECS` while
/// idle, `INITIAL_SECS - 1` down to `0` across the ticks of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    state: CountdownState,
    remaining_secs: u8,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            state: CountdownState::Idle,
            remaining_secs: INITIAL_SECS,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining_secs(&self) -> u8 {
        self.remaining_secs
    }

    pub fn is_idle(&self) -> bool {
        self.state == CountdownState::Idle
    }

    /// Rewind to the full duration and enter `Running`.
    ///
    /// Safe to call at any time; a run already in progress is forgotten.
    /// The first `tick()` after `start()` yields `INITIAL_SECS - 1`.
    pub fn start(&mut self) {
        self.state = CountdownState::Running;
        self.remaining_secs = INITIAL_SECS;
    }

    /// Advance by one elapsed second.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            CountdownState::Idle => TickOutcome::Noop,
            CountdownState::Running => {
                if self.remaining_secs == 0 {
                    self.remaining_secs = INITIAL_SECS;
                    self.state = CountdownState::Idle;
                    TickOutcome::Completed
                } else {
                    self.remaining_secs -= 1;
                    TickOutcome::Tick(self.remaining_secs)
                }
            }
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
