use palette::{FromColor, Hsv, Srgb};

/// Straight-alpha sRGB color.
///
/// This crate never composites, so there is no premultiplication; the
/// drawable surface decides how to encode these for its own pipeline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Resolves a display color from hue/saturation/value, all in `[0, 1]`.
    ///
    /// Hue wraps: `0.0` and `1.0` are both red.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let hsv: Hsv = Hsv::new(hue * 360.0, saturation, value);
        let rgb = Srgb::from_color(hsv);
        Self::new(rgb.red, rgb.green, rgb.blue, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Returns 8-bit sRGB components for terminal/display consumers.
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn full_value_zero_saturation_is_white() {
        let c = Color::from_hsv(0.0, 0.0, 1.0);
        assert!(close(c.r, 1.0) && close(c.g, 1.0) && close(c.b, 1.0));
    }

    #[test]
    fn pure_red() {
        let c = Color::from_hsv(0.0, 1.0, 1.0);
        assert!(close(c.r, 1.0) && close(c.g, 0.0) && close(c.b, 0.0));
    }

    #[test]
    fn pure_green_at_one_third_hue() {
        let c = Color::from_hsv(1.0 / 3.0, 1.0, 1.0);
        assert!(close(c.r, 0.0) && close(c.g, 1.0) && close(c.b, 0.0));
    }

    #[test]
    fn to_srgb_u8_rounds_and_clamps() {
        assert_eq!(Color::new(1.0, 0.0, 0.5, 1.0).to_srgb_u8(), [255, 0, 128, 255]);
        assert_eq!(Color::new(2.0, -1.0, 0.0, 1.0).to_srgb_u8(), [255, 0, 0, 255]);
    }
}
