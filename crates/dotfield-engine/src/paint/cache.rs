use std::collections::HashMap;

use super::Color;
use super::hsl::resolve_hsl;

/// Quantized HSL key for color memoization.
///
/// Components are stored as integer hundredths (`0..=100`), produced by
/// rounding half-away-from-zero. Resolving colors is far more expensive than
/// hashing three bytes, and two decimal digits of hue/saturation are below
/// what the gradient animation can visibly distinguish.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ColorKey {
    hue: u8,
    saturation: u8,
    lightness: u8,
}

impl ColorKey {
    /// Quantizes unit-range components to hundredths.
    ///
    /// Inputs are expected in `[0, 1]`; out-of-range and non-finite values
    /// saturate through the `as` cast, so a bad sensor reading can at worst
    /// produce a wrong color, never a poisoned cache entry.
    #[inline]
    pub fn quantize(hue: f32, saturation: f32, lightness: f32) -> Self {
        let q = |c: f32| (c * 100.0).round() as u8;
        Self {
            hue: q(hue),
            saturation: q(saturation),
            lightness: q(lightness),
        }
    }

    /// The rounded hue this key encodes, back in `[0, 1]`.
    #[inline]
    pub fn hue(self) -> f32 {
        self.hue as f32 / 100.0
    }

    #[inline]
    pub fn saturation(self) -> f32 {
        self.saturation as f32 / 100.0
    }

    #[inline]
    pub fn lightness(self) -> f32 {
        self.lightness as f32 / 100.0
    }
}

/// Memoization cache for resolved display colors.
///
/// Growth is monotonic: the key space is at most 101³ and a running gradient
/// visits only a narrow band of it, so there is no eviction. One cache per
/// field instance; independent fields never contend on shared color state.
#[derive(Debug, Default)]
pub struct ColorCache {
    colors: HashMap<ColorKey, Color>,
    hits: u64,
    misses: u64,
}

impl ColorCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color for `key`, resolving and inserting it on first use.
    ///
    /// The color is always computed from the key's rounded components, so
    /// every caller that lands on the same key observes the same value.
    pub fn resolve(&mut self, key: ColorKey) -> Color {
        if let Some(&color) = self.colors.get(&key) {
            self.hits += 1;
            return color;
        }

        let color = resolve_hsl(key.hue(), key.saturation(), key.lightness());
        self.colors.insert(key, color);
        self.misses += 1;

        log::trace!(
            "color cache miss: key=({:.2}, {:.2}, {:.2}) entries={}",
            key.hue(),
            key.saturation(),
            key.lightness(),
            self.colors.len()
        );

        color
    }

    /// Number of distinct colors resolved so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(hits, misses)` counters since construction.
    #[inline]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
