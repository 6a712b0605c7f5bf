//! Declarative view model for the countdown card.
//!
//! [`TimerView`] observes the tick source and reduces (current value,
//! phase) to a [`Frame`]: what to draw, not how to draw it. The rendering
//! surface interprets the frame; its only scheduling input is the bar
//! transition embedded there.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::animation::Transition;
use crate::strings::{self, Locale};
use crate::timer::{TickSource, INITIAL_SECS};

/// Fixed delay before the bar animation begins, in milliseconds.
pub const START_DELAY_MS: u64 = 450;

/// Target state of the bar animation, toggled by the start control.
///
/// Independent of the numeric countdown value: the phase only flips on user
/// action, never on ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Collapsed,
    Expanded,
}

impl TimerPhase {
    pub fn toggled(self) -> Self {
        match self {
            TimerPhase::Collapsed => TimerPhase::Expanded,
            TimerPhase::Expanded => TimerPhase::Collapsed,
        }
    }

    /// Bar extent this phase animates toward: `Expanded` empties the bar,
    /// `Collapsed` fills the full container height.
    pub fn bar_extent(self) -> f32 {
        match self {
            TimerPhase::Expanded => 0.0,
            TimerPhase::Collapsed => 1.0,
        }
    }
}

/// Bar description: where the extent should head and how fast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    /// Fraction of the container height, 0.0 (empty) to 1.0 (full).
    pub target_extent: f32,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartControl {
    pub visible: bool,
    pub label: String,
}

/// One rendered frame of the card, a pure function of the observed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub display: String,
    pub bar: BarSpec,
    pub start_control: StartControl,
}

/// The countdown card's state holder.
pub struct TimerView {
    source: TickSource,
    values: watch::Receiver<u8>,
    phase: TimerPhase,
    locale: Locale,
}

impl TimerView {
    pub fn new(locale: Locale) -> Self {
        let source = TickSource::new();
        let values = source.subscribe();
        Self {
            source,
            values,
            phase: TimerPhase::Collapsed,
            locale,
        }
    }

    pub fn source(&self) -> &TickSource {
        &self.source
    }

    /// Fresh receiver for the remaining-seconds cell.
    pub fn values(&self) -> watch::Receiver<u8> {
        self.source.subscribe()
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    fn current(&self) -> u8 {
        *self.values.borrow()
    }

    /// The start control shows only at the idle value, which is what keeps
    /// a restart unreachable mid-countdown.
    pub fn start_visible(&self) -> bool {
        self.current() == INITIAL_SECS
    }

    /// The single user action: toggle the phase, then restart the
    /// countdown, as one atomic UI event.
    ///
    /// While the control is hidden the press does not exist as far as the
    /// view is concerned.
    pub fn press_start(&mut self) {
        if !self.start_visible() {
            return;
        }
        self.phase = self.phase.toggled();
        self.source.start();
    }

    /// Reduce the observed state to a frame.
    ///
    /// The bar transition is recomputed from the value current at call
    /// time; the frame produced right after a phase toggle is the one whose
    /// timing the surface latches, so the visible countdown rate is keyed
    /// to the value captured at the moment of the toggle.
    pub fn frame(&self) -> Frame {
        let value = self.current();
        Frame {
            display: format_display(value),
            bar: BarSpec {
                target_extent: self.phase.bar_extent(),
                transition: Transition::linear(u64::from(value) * 1000, START_DELAY_MS),
            },
            start_control: StartControl {
                visible: value == INITIAL_SECS,
                label: strings::start_label(self.locale).to_uppercase(),
            },
        }
    }

    /// Tear down on permanent destruction; no further ticks are observed.
    pub fn dispose(&mut self) {
        self.source.dispose();
    }
}

/// `"00 : 0"` + digit. The single leading zero is a fixed contract; the
/// value never exceeds 9.
pub fn format_display(value: u8) -> String {
    format!("00 : 0{value}")
}
