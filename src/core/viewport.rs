//! One-shot visibility gate
//!
//! A `ViewportWatch` fires the first time its target's visible fraction
//! reaches the threshold and never again. The browser side feeds it
//! intersection ratios and disconnects the observer once it has fired.

/// Default visible fraction for starting an effect
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Visible fraction for fade-in reveals
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWatch {
    threshold: f64,
    fired: bool,
}

impl ViewportWatch {
    /// Create a pending watch. Threshold is clamped to `[0, 1]`, NaN becomes 0.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Feed one intersection ratio. Returns `true` only on the observation
    /// that first meets the threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.fired || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    /// Fire without an observation (platform lacks visibility detection).
    /// Returns `true` if this call did the firing.
    pub fn force(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

impl Default for ViewportWatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_threshold() {
        let mut watch = ViewportWatch::new(0.5);

        assert!(!watch.observe(0.0));
        assert!(!watch.observe(0.49));
        assert!(watch.observe(0.5));
        assert!(watch.is_fired());
    }

    #[test]
    fn test_never_fires_twice() {
        let mut watch = ViewportWatch::new(0.3);
        let fired = [0.1, 0.35, 0.9, 1.0, 0.0, 0.6]
            .into_iter()
            .filter(|ratio| watch.observe(*ratio))
            .count();

        assert_eq!(fired, 1);
        assert!(!watch.force());
    }

    #[test]
    fn test_force_fires_when_pending() {
        let mut watch = ViewportWatch::default();

        assert!(watch.force());
        assert!(!watch.observe(1.0));
        assert!(!watch.force());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(ViewportWatch::new(-1.0).threshold(), 0.0);
        assert_eq!(ViewportWatch::new(2.0).threshold(), 1.0);
        assert_eq!(ViewportWatch::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn test_nan_ratio_ignored() {
        let mut watch = ViewportWatch::new(0.0);

        assert!(!watch.observe(f64::NAN));
        assert!(watch.observe(0.0));
    }
}
