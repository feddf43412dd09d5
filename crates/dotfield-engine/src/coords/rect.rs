use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds the bounding rectangle of a marker: `size` centered on `center`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: Vec2::new(center.x - size.x / 2.0, center.y - size.y / 2.0),
            size,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// True when the rectangles share positive overlap area.
    ///
    /// Edge-touching rectangles do not intersect, and a degenerate rectangle
    /// (zero or negative extent) intersects nothing. This is the culling
    /// predicate for markers near the container edge.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();

        let w = a.max().x.min(b.max().x) - a.min().x.max(b.min().x);
        let h = a.max().y.min(b.max().y) - a.min().y.max(b.min().y);

        w > 0.0 && h > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── from_center_size ──────────────────────────────────────────────────

    #[test]
    fn from_center_size_centers_the_box() {
        let b = Rect::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(b.min(), Vec2::new(8.0, 17.0));
        assert_eq!(b.max(), Vec2::new(12.0, 23.0));
    }

    // ── intersects ────────────────────────────────────────────────────────

    #[test]
    fn intersects_overlapping() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersects(r(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn intersects_contained() {
        assert!(r(0.0, 0.0, 100.0, 100.0).intersects(r(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn intersects_partially_outside() {
        // A marker straddling the container edge still counts as visible.
        assert!(r(0.0, 0.0, 300.0, 200.0).intersects(r(-3.0, 196.0, 7.0, 7.0)));
    }

    #[test]
    fn touching_edge_does_not_intersect() {
        // Zero-area overlap is not an intersection.
        assert!(!r(0.0, 0.0, 10.0, 10.0).intersects(r(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn disjoint_does_not_intersect() {
        assert!(!r(0.0, 0.0, 5.0, 5.0).intersects(r(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn degenerate_container_intersects_nothing() {
        assert!(!r(0.0, 0.0, 0.0, 200.0).intersects(r(10.0, 10.0, 5.0, 5.0)));
        assert!(!r(0.0, 0.0, 300.0, 0.0).intersects(r(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn negative_extent_is_normalized() {
        let n = r(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(n, r(6.0, 4.0, 4.0, 6.0));
    }
}
