//! Range-mapping and clamping helpers shared by layout and color mapping.

/// Maps `v` from the range `[in_min, in_max]` to `[out_min, out_max]` using
/// linear interpolation.
///
/// The result is intentionally not clipped to the output range, so values
/// outside the input range extrapolate: `map_range(2.0, 0.0, 1.0, 0.0, 100.0)`
/// returns `200.0`.
#[inline]
pub fn map_range(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (v - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Returns `v` bounded by `[lower, upper]`, both bounds inclusive.
#[inline]
pub fn clip(v: f32, lower: f32, upper: f32) -> f32 {
    upper.min(v.max(lower))
}

/// Returns `v` bounded by `[0, 1]`.
#[inline]
pub fn clip_unit(v: f32) -> f32 {
    clip(v, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── map_range ─────────────────────────────────────────────────────────

    #[test]
    fn map_range_midpoint() {
        assert_eq!(map_range(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 6.0, 26.0, 22.0), 26.0);
        assert_eq!(map_range(6.0, 0.0, 6.0, 26.0, 22.0), 22.0);
    }

    #[test]
    fn map_range_extrapolates_unclamped() {
        assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 100.0), 200.0);
        assert_eq!(map_range(-1.0, 0.0, 1.0, 0.0, 100.0), -100.0);
    }

    #[test]
    fn map_range_inverted_output() {
        // Decreasing output range is valid (used for size falloff).
        assert_eq!(map_range(3.0, 0.0, 6.0, 1.0, 0.1), 0.55);
    }

    // ── clip ──────────────────────────────────────────────────────────────

    #[test]
    fn clip_unit_clamps_low() {
        assert_eq!(clip_unit(-0.3), 0.0);
    }

    #[test]
    fn clip_unit_clamps_high() {
        assert_eq!(clip_unit(1.7), 1.0);
    }

    #[test]
    fn clip_unit_passes_interior() {
        assert_eq!(clip_unit(0.4), 0.4);
    }

    #[test]
    fn clip_bounds_are_inclusive() {
        assert_eq!(clip(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clip(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clip_nan_resolves_to_lower_bound() {
        // `max`/`min` ignore a NaN operand, so a NaN input degrades to the
        // lower bound instead of poisoning downstream color math.
        assert_eq!(clip_unit(f32::NAN), 0.0);
    }
}
