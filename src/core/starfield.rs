//! Starfield particle model
//!
//! Owns the batch of stars drawn behind the hero section. The batch is sized
//! from the viewport area and is always rebuilt as a whole when the viewport
//! changes, so a frame never mixes stars laid out for two different sizes.
//!
//! Drawing lives in `ui::starfield`; this module only knows about numbers.

use rand::Rng;

use super::motion::MotionPreference;

/// Fewest stars drawn, even on a tiny viewport
pub const MIN_STARS: usize = 160;

/// Most stars drawn, even on a huge viewport
pub const MAX_STARS: usize = 260;

/// Viewport area (CSS px²) per star before clamping
pub const AREA_PER_STAR: f64 = 8_000.0;

/// Radius range of a star in CSS px
pub const RADIUS_RANGE: std::ops::Range<f64> = 0.2..1.7;

/// Per-frame alpha jitter range for the twinkle
pub const TWINKLE_RANGE: std::ops::Range<f64> = 0.45..0.85;

/// A single star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Downward drift in px per frame
    pub speed: f64,
}

/// Number of stars for a viewport, clamped to `[MIN_STARS, MAX_STARS]`
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width.max(0.0)) * (height.max(0.0));
    let raw = (area / AREA_PER_STAR).round();
    // `as` saturates on overflow and maps NaN to 0, clamp handles both
    (raw as usize).clamp(MIN_STARS, MAX_STARS)
}

/// Live particle batch for one viewport size
#[derive(Clone, Debug)]
pub struct Starfield {
    width: f64,
    height: f64,
    motion: MotionPreference,
    particles: Vec<Particle>,
}

impl Starfield {
    /// Build a fresh batch for the given viewport
    pub fn new<R: Rng>(width: f64, height: f64, motion: MotionPreference, rng: &mut R) -> Self {
        let mut field = Self {
            width: 0.0,
            height: 0.0,
            motion,
            particles: Vec::new(),
        };
        field.resize(width, height, rng);
        field
    }

    /// Replace the whole batch with one laid out for the new viewport
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let speed = self.motion.drift_speed();

        let batch = (0..particle_count(width, height))
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                radius: rng.gen_range(RADIUS_RANGE),
                speed: rng.gen_range(speed.clone()),
            })
            .collect();

        self.width = width;
        self.height = height;
        self.particles = batch;
    }

    /// Move every star down by its speed, wrapping stars that leave the
    /// bottom edge back to the top at a random column
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            particle.y += particle.speed;
            if particle.y > self.height {
                particle.y = 0.0;
                particle.x = rng.gen_range(0.0..self.width);
            }
        }
    }

    /// Alpha for one star on one frame
    pub fn twinkle_alpha<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(TWINKLE_RANGE)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5747)
    }

    fn in_bounds(field: &Starfield) -> bool {
        field.particles().iter().all(|p| {
            (0.0..=field.width()).contains(&p.x) && (0.0..=field.height()).contains(&p.y)
        })
    }

    #[test]
    fn test_particle_count_is_clamped() {
        assert_eq!(particle_count(0.0, 0.0), MIN_STARS);
        assert_eq!(particle_count(320.0, 480.0), MIN_STARS);
        assert_eq!(particle_count(7680.0, 4320.0), MAX_STARS);
        assert_eq!(particle_count(f64::NAN, 100.0), MIN_STARS);
        assert_eq!(particle_count(f64::INFINITY, 100.0), MAX_STARS);
    }

    #[test]
    fn test_particle_count_scales_between_bounds() {
        // 1600 x 1000 = 1.6M px² → 200 stars
        assert_eq!(particle_count(1600.0, 1000.0), 200);
    }

    #[test]
    fn test_new_batch_within_viewport() {
        let field = Starfield::new(1280.0, 720.0, MotionPreference::full(), &mut rng());

        assert_eq!(field.len(), particle_count(1280.0, 720.0));
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!(RADIUS_RANGE.contains(&p.radius));
            assert!(MotionPreference::full().drift_speed().contains(&p.speed));
        }
    }

    #[test]
    fn test_reduced_motion_uses_slow_drift() {
        let field = Starfield::new(1280.0, 720.0, MotionPreference::reduced(), &mut rng());
        let range = MotionPreference::reduced().drift_speed();

        assert!(field.particles().iter().all(|p| range.contains(&p.speed)));
    }

    #[test]
    fn test_resize_replaces_whole_batch() {
        let mut rng = rng();
        let mut field = Starfield::new(2560.0, 1440.0, MotionPreference::full(), &mut rng);
        assert_eq!(field.len(), MAX_STARS);

        field.resize(400.0, 300.0, &mut rng);

        assert_eq!(field.len(), MIN_STARS);
        assert_eq!(field.width(), 400.0);
        assert_eq!(field.height(), 300.0);
        // No star from the large layout may survive outside the new bounds
        assert!(in_bounds(&field));
    }

    #[test]
    fn test_advance_moves_down_by_speed() {
        let mut rng = rng();
        let mut field = Starfield::new(800.0, 600.0, MotionPreference::full(), &mut rng);
        let before: Vec<Particle> = field.particles().to_vec();

        field.advance(&mut rng);

        for (old, new) in before.iter().zip(field.particles()) {
            if old.y + old.speed <= field.height() {
                assert_eq!(new.y, old.y + old.speed);
                assert_eq!(new.x, old.x);
            } else {
                assert_eq!(new.y, 0.0);
            }
        }
    }

    #[test]
    fn test_advance_wraps_to_top() {
        let mut rng = rng();
        let mut field = Starfield::new(800.0, 600.0, MotionPreference::full(), &mut rng);

        // Enough frames for even the slowest star to cross the whole height
        for _ in 0..5_000 {
            field.advance(&mut rng);
            assert!(in_bounds(&field));
        }
        assert_eq!(field.len(), particle_count(800.0, 600.0));
    }

    #[test]
    fn test_twinkle_alpha_range() {
        let mut rng = rng();
        let field = Starfield::new(800.0, 600.0, MotionPreference::full(), &mut rng);

        for _ in 0..1_000 {
            assert!(TWINKLE_RANGE.contains(&field.twinkle_alpha(&mut rng)));
        }
    }

    #[test]
    fn test_degenerate_viewport_still_draws() {
        let field = Starfield::new(0.0, 0.0, MotionPreference::full(), &mut rng());

        assert_eq!(field.len(), MIN_STARS);
        assert!(in_bounds(&field));
    }
}
