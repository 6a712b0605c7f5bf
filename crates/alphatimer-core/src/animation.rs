//! Timed transitions for the bar animation.
//!
//! The view only *describes* an animation as a [`Transition`]; the
//! rendering surface owns one [`AnimatedValue`] per animated property and
//! samples it once per painted frame. Retargeting starts a fresh
//! interpolation from the currently sampled value, so an animation that is
//! interrupted mid-flight continues smoothly toward the new target.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
}

impl Easing {
    /// Map normalized elapsed time `t` in [0, 1] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
        }
    }
}

/// Timing description for one animated property change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

impl Transition {
    pub fn linear(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration_ms,
            delay_ms,
            easing: Easing::Linear,
        }
    }

    /// A transition that settles instantly.
    pub fn immediate() -> Self {
        Self::linear(0, 0)
    }
}

/// One scalar property animated over wall-clock time.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    start: f32,
    target: f32,
    started_at: Instant,
    transition: Transition,
}

impl AnimatedValue {
    /// A settled value (no animation pending).
    pub fn new(value: f32, now: Instant) -> Self {
        Self {
            start: value,
            target: value,
            started_at: now,
            transition: Transition::immediate(),
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin interpolating toward `target` from the value sampled at `now`.
    ///
    /// A retarget to the current target is a no-op, so callers may feed the
    /// latest frame description every repaint without restarting the
    /// animation.
    pub fn retarget(&mut self, target: f32, transition: Transition, now: Instant) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.start = self.sample(now);
        self.target = target;
        self.transition = transition;
        self.started_at = now;
    }

    /// Sampled value at `now`: the start value during the delay window, the
    /// eased interpolation inside the duration, the target afterwards.
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_millis() as u64;
        let Some(active_ms) = elapsed_ms.checked_sub(self.transition.delay_ms) else {
            return self.start;
        };
        if self.transition.duration_ms == 0 || active_ms >= self.transition.duration_ms {
            return self.target;
        }
        let t = active_ms as f32 / self.transition.duration_ms as f32;
        self.start + (self.target - self.start) * self.transition.easing.apply(t)
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_millis() as u64;
        elapsed_ms >= self.transition.delay_ms + self.transition.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn holds_start_value_during_delay() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(1.0, t0);
        value.retarget(0.0, Transition::linear(6000, 450), t0);

        assert_eq!(value.sample(at(t0, 0)), 1.0);
        assert_eq!(value.sample(at(t0, 449)), 1.0);
    }

    #[test]
    fn linear_midpoint_is_halfway() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(1.0, t0);
        value.retarget(0.0, Transition::linear(6000, 450), t0);

        let mid = value.sample(at(t0, 450 + 3000));
        assert!((mid - 0.5).abs() < 1e-3);
    }

    #[test]
    fn clamps_to_target_after_duration() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(1.0, t0);
        value.retarget(0.0, Transition::linear(6000, 450), t0);

        assert_eq!(value.sample(at(t0, 450 + 6000)), 0.0);
        assert!(value.is_settled(at(t0, 450 + 6000)));
    }

    #[test]
    fn same_target_retarget_does_not_restart() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(1.0, t0);
        value.retarget(0.0, Transition::linear(6000, 450), t0);

        // Mid-flight, feed the same target with different timing.
        let mid = at(t0, 450 + 3000);
        value.retarget(0.0, Transition::linear(1000, 0), mid);
        let later = at(t0, 450 + 4500);
        let expected = 1.0 - 4500.0 / 6000.0;
        assert!((value.sample(later) - expected).abs() < 1e-3);
    }

    #[test]
    fn retarget_continues_from_current_sample() {
        let t0 = Instant::now();
        let mut value = AnimatedValue::new(1.0, t0);
        value.retarget(0.0, Transition::linear(1000, 0), t0);

        let mid = at(t0, 500);
        value.retarget(1.0, Transition::linear(1000, 0), mid);
        assert!((value.sample(mid) - 0.5).abs() < 1e-3);
        assert_eq!(value.sample(at(t0, 1500)), 1.0);
    }
}
