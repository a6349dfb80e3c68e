//! User motion preference
//!
//! Read once at startup from `prefers-reduced-motion`. Components that
//! animate take a `MotionPreference` at construction and derive their
//! pacing from it; they never re-query the platform.

use std::ops::Range;
use std::time::Duration;

/// Media query that signals the user asked for less motion
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Delay multiplier applied to timer-driven animations under reduced motion
pub const REDUCED_DELAY_SCALE: f64 = 2.5;

/// Star drift speed (px per frame) with full motion
pub const DRIFT_SPEED: Range<f64> = 0.15..0.5;

/// Star drift speed (px per frame) with reduced motion
pub const REDUCED_DRIFT_SPEED: Range<f64> = 0.05..0.15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub fn full() -> Self {
        Self { reduced: false }
    }

    pub fn reduced() -> Self {
        Self { reduced: true }
    }

    /// Multiplier for timer delays
    pub fn delay_scale(&self) -> f64 {
        if self.reduced { REDUCED_DELAY_SCALE } else { 1.0 }
    }

    /// Scale a delay by the preference
    pub fn scale(&self, delay: Duration) -> Duration {
        delay.mul_f64(self.delay_scale())
    }

    /// Range of per-frame drift speeds for the starfield
    pub fn drift_speed(&self) -> Range<f64> {
        if self.reduced {
            REDUCED_DRIFT_SPEED
        } else {
            DRIFT_SPEED
        }
    }
}
