//! Distance-to-color mapping.
//!
//! The focal point sweeps across the field and every marker takes its hue
//! from how far it sits from that point: near markers sit at the low end of
//! the hue band, far markers at the high end, and markers beyond the
//! desaturation band gray out entirely.

use crate::math::{clip_unit, map_range};
use crate::paint::{ColorCache, ColorKey, GradientPair};

/// Color mapping parameters.
///
/// Defaults give a 0.2–0.8 hue band over the first 380 px of distance,
/// constant lightness, and a gray-out ramp between 400 and 700 px.
#[derive(Debug, Copy, Clone)]
pub struct ColorMap {
    /// Hue assigned at `radius_for_min_hue` distance.
    pub min_hue: f32,
    /// Hue assigned at `radius_for_max_hue` distance.
    pub max_hue: f32,
    pub radius_for_min_hue: f32,
    pub radius_for_max_hue: f32,
    /// Saturation inside the desaturation threshold.
    pub base_saturation: f32,
    /// Constant lightness for every resolved color.
    pub lightness: f32,
    /// Distance at which saturation starts ramping toward zero (inclusive).
    pub desaturation_start: f32,
    /// Distance at which saturation reaches zero.
    pub desaturation_end: f32,
    /// Distance offset between a marker's two gradient hues. Gives each
    /// marker a slight self-shading instead of a flat fill.
    pub self_shade_offset: f32,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            min_hue: 0.2,
            max_hue: 0.8,
            radius_for_min_hue: 0.0,
            radius_for_max_hue: 380.0,
            base_saturation: 0.6,
            lightness: 0.7,
            desaturation_start: 400.0,
            desaturation_end: 700.0,
            self_shade_offset: 30.0,
        }
    }
}

impl ColorMap {
    /// Raw hue for a focal distance, before clamping.
    #[inline]
    pub fn hue_for(&self, distance: f32) -> f32 {
        map_range(
            distance,
            self.radius_for_min_hue,
            self.radius_for_max_hue,
            self.min_hue,
            self.max_hue,
        )
    }

    /// Saturation for a focal distance, before clamping.
    ///
    /// The desaturation ramp is boundary-inclusive: exactly at
    /// `desaturation_start` the result is still `base_saturation`.
    #[inline]
    pub fn saturation_for(&self, distance: f32) -> f32 {
        if distance >= self.desaturation_start {
            map_range(
                distance,
                self.desaturation_start,
                self.desaturation_end,
                self.base_saturation,
                0.0,
            )
        } else {
            self.base_saturation
        }
    }

    /// Computes the gradient pair for a marker at `distance` from the focal
    /// point, resolving both colors through `cache`.
    ///
    /// Hue and saturation are clamped to `[0, 1]` and quantized to hundredths
    /// before resolution, so the cache sees a small, bounded key space. Both
    /// colors are derived from their rounded keys, keeping repeated lookups
    /// bit-identical.
    pub fn gradient_for(&self, distance: f32, cache: &mut ColorCache) -> GradientPair {
        let start_hue = clip_unit(self.hue_for(distance - self.self_shade_offset));
        let end_hue = clip_unit(self.hue_for(distance));
        let saturation = clip_unit(self.saturation_for(distance));

        let start = cache.resolve(ColorKey::quantize(start_hue, saturation, self.lightness));
        let end = cache.resolve(ColorKey::quantize(end_hue, saturation, self.lightness));

        GradientPair::new(start, end)
    }
}
