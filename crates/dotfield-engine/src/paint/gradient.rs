use super::Color;

/// The two colors of a marker's internal axial gradient.
///
/// `start` sits at the marker's center, `end` at its far corner. The pair is
/// recomputed on every focal-point update; everything else about a marker is
/// fixed at layout time.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GradientPair {
    pub start: Color,
    pub end: Color,
}

impl GradientPair {
    #[inline]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
