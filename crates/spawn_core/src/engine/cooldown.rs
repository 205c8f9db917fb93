//! Per-location cooldown timer
//!
//! Purely reactive: the timer never advances on its own. Whoever owns the
//! clock calls [`CooldownTimer::tick`]; selection only asks [`CooldownTimer::is_ready`].

use serde::{Deserialize, Serialize};

/// Tolerance below which a remaining cooldown counts as expired.
pub const DEFAULT_READY_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CooldownTimer {
    remaining: f32,
}

impl CooldownTimer {
    pub fn with_remaining(remaining: f32) -> Self {
        let mut timer = Self::default();
        timer.set_remaining(remaining);
        timer
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Occupy the location for `duration` seconds.
    pub fn start(&mut self, duration: f32) {
        self.set_remaining(duration);
    }

    /// Advance by `delta` seconds, flooring at zero.
    ///
    /// Negative and non-finite deltas are ignored; a clock never runs backwards.
    pub fn tick(&mut self, delta: f32) {
        if !delta.is_finite() || delta <= 0.0 {
            return;
        }
        self.remaining = (self.remaining - delta).max(0.0);
    }

    #[inline]
    pub fn is_ready(&self, epsilon: f32) -> bool {
        self.remaining <= epsilon
    }

    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }

    fn set_remaining(&mut self, remaining: f32) {
        self.remaining = if remaining.is_finite() { remaining.max(0.0) } else { 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_tick_to_ready() {
        let mut timer = CooldownTimer::default();
        assert!(timer.is_ready(DEFAULT_READY_EPSILON));

        timer.start(2.0);
        assert!(!timer.is_ready(DEFAULT_READY_EPSILON));

        timer.tick(1.5);
        assert!(!timer.is_ready(DEFAULT_READY_EPSILON));
        assert!((timer.remaining() - 0.5).abs() < 1e-6);

        timer.tick(1.0);
        assert_eq!(timer.remaining(), 0.0);
        assert!(timer.is_ready(DEFAULT_READY_EPSILON));
    }

    #[test]
    fn test_ready_within_epsilon() {
        // Float drift from many small ticks must not keep a location blocked.
        let timer = CooldownTimer::with_remaining(DEFAULT_READY_EPSILON * 0.5);
        assert!(timer.is_ready(DEFAULT_READY_EPSILON));

        let timer = CooldownTimer::with_remaining(DEFAULT_READY_EPSILON * 2.0);
        assert!(!timer.is_ready(DEFAULT_READY_EPSILON));
    }

    #[test]
    fn test_many_small_ticks_reach_ready() {
        let mut timer = CooldownTimer::default();
        timer.start(2.0);
        for _ in 0..120 {
            timer.tick(1.0 / 60.0);
        }
        assert!(timer.is_ready(DEFAULT_READY_EPSILON));
    }

    #[test]
    fn test_reset_makes_ready() {
        let mut timer = CooldownTimer::default();
        timer.start(2.0);
        timer.reset();
        assert_eq!(timer.remaining(), 0.0);
        assert!(timer.is_ready(DEFAULT_READY_EPSILON));
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut timer = CooldownTimer::with_remaining(1.0);
        timer.tick(-5.0);
        timer.tick(f32::NAN);
        timer.tick(f32::INFINITY);
        assert_eq!(timer.remaining(), 1.0);
    }

    #[test]
    fn test_negative_and_nan_remaining_clamped() {
        assert_eq!(CooldownTimer::with_remaining(-3.0).remaining(), 0.0);
        assert_eq!(CooldownTimer::with_remaining(f32::NAN).remaining(), 0.0);
    }
}
