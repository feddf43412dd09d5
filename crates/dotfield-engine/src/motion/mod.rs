//! Tilt-to-focal-point mapping.
//!
//! A motion source reports device attitude at a fixed cadence. The first
//! reading becomes the baseline; afterwards the per-axis deltas map linearly
//! into a focal-point adjustment that the caller adds to the field's origin
//! focal point.

use crate::coords::Vec2;
use crate::math::map_range;

/// Device attitude in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
}

impl Attitude {
    #[inline]
    pub const fn new(pitch: f32, roll: f32) -> Self {
        Self { pitch, roll }
    }
}

/// Tilt mapping parameters.
///
/// The axes are deliberately asymmetric: vertical tilt saturates at a
/// smaller angle than horizontal, so pitching the device feels faster than
/// rolling it.
#[derive(Debug, Copy, Clone)]
pub struct TiltConfig {
    /// Pitch delta (radians) that moves the focal point by `max_adjustment`.
    pub max_pitch: f32,
    /// Roll delta (radians) that moves the focal point by `max_adjustment`.
    pub max_roll: f32,
    /// Focal-point travel (logical pixels) at the max tilt angle.
    pub max_adjustment: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_pitch: 0.1,
            max_roll: 0.2,
            max_adjustment: 100.0,
        }
    }
}

/// Maps attitude readings to focal-point adjustments relative to a captured
/// baseline.
#[derive(Debug, Default)]
pub struct TiltTracker {
    config: TiltConfig,
    baseline: Option<Attitude>,
}

impl TiltTracker {
    #[inline]
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            baseline: None,
        }
    }

    /// Consumes one attitude reading and returns the focal-point adjustment.
    ///
    /// The first reading captures the baseline and yields a zero adjustment;
    /// every later reading maps its delta from that baseline. The result is
    /// deliberately unclamped — tilting past the max angle keeps pushing the
    /// focal point, and the color math tolerates focal points far outside
    /// the container.
    pub fn adjustment(&mut self, attitude: Attitude) -> Vec2 {
        let baseline = *self.baseline.get_or_insert(attitude);

        let d_pitch = attitude.pitch - baseline.pitch;
        let d_roll = attitude.roll - baseline.roll;

        let cfg = &self.config;
        Vec2::new(
            map_range(d_roll, -cfg.max_roll, cfg.max_roll, -cfg.max_adjustment, cfg.max_adjustment),
            map_range(d_pitch, -cfg.max_pitch, cfg.max_pitch, -cfg.max_adjustment, cfg.max_adjustment),
        )
    }

    /// Drops the captured baseline; the next reading re-establishes it.
    #[inline]
    pub fn reset(&mut self) {
        self.baseline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn first_reading_captures_baseline_and_yields_zero() {
        let mut tracker = TiltTracker::new(TiltConfig::default());
        let adj = tracker.adjustment(Attitude::new(0.4, -0.2));
        assert_eq!(adj, Vec2::zero());
    }

    #[test]
    fn max_tilt_moves_the_focal_point_by_max_adjustment() {
        let mut tracker = TiltTracker::new(TiltConfig::default());
        tracker.adjustment(Attitude::new(0.0, 0.0));

        let adj = tracker.adjustment(Attitude::new(0.1, 0.2));
        assert!(close(adj.y, 100.0));
        assert!(close(adj.x, 100.0));
    }

    #[test]
    fn axes_are_asymmetric() {
        // The same delta on both axes moves the vertical axis twice as far.
        let mut tracker = TiltTracker::new(TiltConfig::default());
        tracker.adjustment(Attitude::default());

        let adj = tracker.adjustment(Attitude::new(0.05, 0.05));
        assert!(close(adj.y, 50.0));
        assert!(close(adj.x, 25.0));
    }

    #[test]
    fn deltas_are_relative_to_the_baseline_not_zero() {
        let mut tracker = TiltTracker::new(TiltConfig::default());
        tracker.adjustment(Attitude::new(1.0, -1.0));

        // Same attitude again: no delta, no adjustment.
        let adj = tracker.adjustment(Attitude::new(1.0, -1.0));
        assert_eq!(adj, Vec2::zero());

        let adj = tracker.adjustment(Attitude::new(1.05, -1.0));
        assert!(close(adj.y, 50.0));
        assert!(close(adj.x, 0.0));
    }

    #[test]
    fn adjustment_is_unclamped_past_max_tilt() {
        let mut tracker = TiltTracker::new(TiltConfig::default());
        tracker.adjustment(Attitude::default());

        let adj = tracker.adjustment(Attitude::new(0.2, 0.0));
        assert!(close(adj.y, 200.0));
    }

    #[test]
    fn reset_recaptures_the_baseline() {
        let mut tracker = TiltTracker::new(TiltConfig::default());
        tracker.adjustment(Attitude::default());
        tracker.adjustment(Attitude::new(0.1, 0.1));

        tracker.reset();
        let adj = tracker.adjustment(Attitude::new(0.1, 0.1));
        assert_eq!(adj, Vec2::zero());
    }
}
