use crate::coords::Vec2;
use crate::paint::GradientPair;

/// One oriented dot on the field.
///
/// Invariant:
/// - `position`, `size`, and `rotation` are fixed at layout time.
/// - `gradient` is rewritten on every focal-point update and always reflects
///   the most recently completed update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    /// Center, in container-local logical pixels.
    pub position: Vec2,
    /// Edge length of the (square) dot.
    pub size: f32,
    /// Rotation in radians, so the dot's glyph points away from the rings'
    /// center.
    pub rotation: f32,
    /// Current gradient colors. Meaningless until the first update runs.
    pub gradient: GradientPair,
}

impl Marker {
    #[inline]
    pub fn new(position: Vec2, size: f32, rotation: f32) -> Self {
        Self {
            position,
            size,
            rotation,
            gradient: GradientPair::default(),
        }
    }
}
