//! HSL→HSB (a.k.a. HSV) conversion.
//!
//! The color mapper thinks in lightness, while the resolver consumes
//! hue/saturation/brightness, so the lightness axis is converted here.

use super::Color;

/// Converts an HSL triple to the equivalent HSV triple.
///
/// All components are in `[0, 1]`. Hue passes through unchanged:
///
/// ```text
/// v   = l + s_l * min(l, 1 - l)
/// s_v = 0            if v == 0
///       2 (1 - l/v)  otherwise
/// ```
#[inline]
pub fn hsl_to_hsv(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    let value = lightness + saturation * lightness.min(1.0 - lightness);

    let sv = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - lightness / value)
    };

    (hue, sv, value)
}

/// Resolves an HSL triple straight to a display color.
#[inline]
pub fn resolve_hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let (h, s, v) = hsl_to_hsv(hue, saturation, lightness);
    Color::from_hsv(h, s, v)
}
