//! Count-up number animation
//!
//! Linear interpolation from zero to a target over a fixed duration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::motion::MotionPreference;

/// Default run time of a count-up
pub const COUNT_DURATION_MS: u64 = 1600;

/// A stat shown on the landing page, e.g. "2400+ ideas captured"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: u64,
    pub suffix: String,
    pub label: String,
}

impl CounterSpec {
    pub fn new(target: u64, suffix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    duration: Duration,
}

impl CountUp {
    /// Reduced motion collapses the animation to a jump
    pub fn new(target: u64, motion: MotionPreference) -> Self {
        let duration = if motion.reduced {
            Duration::ZERO
        } else {
            Duration::from_millis(COUNT_DURATION_MS)
        };
        Self { target, duration }
    }

    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Value to display `elapsed` after start
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if elapsed >= self.duration {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        ((self.target as f64) * progress).floor() as u64
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Group thousands with commas: 12400 → "12,400"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let count = CountUp::with_duration(1000, Duration::from_millis(1000));

        assert_eq!(count.value_at(Duration::ZERO), 0);
        assert_eq!(count.value_at(Duration::from_millis(250)), 250);
        assert_eq!(count.value_at(Duration::from_millis(500)), 500);
        assert_eq!(count.value_at(Duration::from_millis(1000)), 1000);
        assert_eq!(count.value_at(Duration::from_secs(60)), 1000);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let count = CountUp::new(2400, MotionPreference::full());
        let mut last = 0;

        for ms in (0..=2000).step_by(16) {
            let value = count.value_at(Duration::from_millis(ms));
            assert!(value >= last);
            assert!(value <= 2400);
            last = value;
        }
        assert_eq!(last, 2400);
    }

    #[test]
    fn test_reduced_motion_jumps_to_target() {
        let count = CountUp::new(75, MotionPreference::reduced());

        assert!(count.is_done(Duration::ZERO));
        assert_eq!(count.value_at(Duration::ZERO), 75);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12400), "12,400");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
