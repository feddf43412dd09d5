//! Concentric-ring marker layout.
//!
//! Markers are placed on rings around the origin focal point (bottom-center
//! of the container), ring-major then angle-ascending. Layout is a pure
//! function of the container size: identical input produces identical
//! placements, which downstream tests rely on.

use std::f32::consts::{PI, TAU};

use crate::coords::{Rect, Vec2};
use crate::field::Marker;
use crate::math::map_range;

/// Ring layout parameters.
///
/// Defaults: seven rings (indices `0..=6`), 13 px dots at the center ring
/// shrinking to roughly a tenth at the edge rings, and a radial step that
/// tightens slightly per ring.
#[derive(Debug, Copy, Clone)]
pub struct RingLayout {
    /// Highest ring index; rings `0..=ring_count` are generated.
    pub ring_count: u32,
    /// Dot edge length at the center ring.
    pub base_dot_size: f32,
    /// Radius of ring 0.
    pub base_radius: f32,
    /// Per-ring radial step at ring 0.
    pub radial_step_inner: f32,
    /// Per-ring radial step at ring `ring_count`.
    pub radial_step_outer: f32,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            ring_count: 6,
            base_dot_size: 13.0,
            base_radius: 40.0,
            radial_step_inner: 26.0,
            radial_step_outer: 22.0,
        }
    }
}

impl RingLayout {
    /// The fixed reference point rings are centered on: bottom-center of the
    /// container. Also the baseline the motion collaborator offsets from.
    #[inline]
    pub fn origin_focal_point(&self, container: Vec2) -> Vec2 {
        Vec2::new(container.x / 2.0, container.y)
    }

    /// Generates marker placements for `container`, culling markers whose
    /// bounding box falls fully outside it.
    ///
    /// A degenerate container (zero or negative extent) yields an empty set.
    pub fn layout(&self, container: Vec2) -> Vec<Marker> {
        let bounds = Rect::new(0.0, 0.0, container.x, container.y);
        if bounds.is_empty() || !bounds.size.is_finite() {
            return Vec::new();
        }

        let focal = self.origin_focal_point(container);
        let rings = self.ring_count as f32;
        let center_ring = (self.ring_count / 2) as f32;

        let mut markers = Vec::new();

        for ring in 0..=self.ring_count {
            let i = ring as f32;

            // Rings farther from the center ring carry smaller dots.
            let falloff = (i - center_ring).abs();
            let scale = map_range(falloff, 0.0, rings, 1.0, 0.1);
            let size = self.base_dot_size * scale;

            // Outer rings are smaller-dotted, so tighten their radial step.
            let step = map_range(i, 0.0, rings, self.radial_step_inner, self.radial_step_outer);
            let radius = self.base_radius + i * step;

            // Inner rings take coarser angular spacing; the interval divides
            // the full turn evenly, keeping density near the circumference.
            let interval = PI / (6.0 * (i + 1.0));
            let count = (TAU / interval).round() as u32;

            for k in 0..count {
                let angle = k as f32 * interval;

                let position = Vec2::new(
                    radius * angle.sin() + focal.x,
                    radius * angle.cos() + focal.y,
                );

                // Dots carry a directional glyph; point it away from the
                // ring center.
                let rotation = -angle + PI;

                let frame = Rect::from_center_size(position, Vec2::new(size, size));
                if frame.intersects(bounds) {
                    markers.push(Marker::new(position, size, rotation));
                }
            }
        }

        log::debug!(
            "layout: container=({}, {}) rings={} markers={}",
            container.x,
            container.y,
            self.ring_count + 1,
            markers.len()
        );

        markers
    }
}
