use crate::colormap::ColorMap;
use crate::coords::Vec2;
use crate::layout::RingLayout;
use crate::paint::ColorCache;

use super::Marker;

/// Owns the marker set for one card-sized container and recolors it as the
/// focal point moves.
///
/// Updates are synchronous and complete: when [`update_colors`] returns,
/// every marker's gradient reflects the supplied focal point, and the
/// revision counter has advanced exactly once. A drawable surface that
/// watches the revision gets one batch-complete signal per update instead of
/// one per marker.
///
/// The color cache is owned per field, so independent fields never share
/// color state.
///
/// [`update_colors`]: Field::update_colors
#[derive(Debug)]
pub struct Field {
    markers: Vec<Marker>,
    cache: ColorCache,
    colormap: ColorMap,
    origin_focal_point: Vec2,
    revision: u64,
}

impl Field {
    /// Lays out markers for `container` with default parameters and colors
    /// them at the origin focal point.
    pub fn new(container: Vec2) -> Self {
        Self::with_config(container, RingLayout::default(), ColorMap::default())
    }

    /// Lays out markers with explicit layout and color-mapping parameters.
    ///
    /// Layout runs once here; the field does not re-layout on container
    /// resize.
    pub fn with_config(container: Vec2, layout: RingLayout, colormap: ColorMap) -> Self {
        let origin_focal_point = layout.origin_focal_point(container);

        let mut field = Self {
            markers: layout.layout(container),
            cache: ColorCache::new(),
            colormap,
            origin_focal_point,
            revision: 0,
        };

        field.update_colors(origin_focal_point);
        field
    }

    /// The fixed baseline focal point (bottom-center at layout time).
    /// Motion collaborators add their tilt adjustments to this.
    #[inline]
    pub fn origin_focal_point(&self) -> Vec2 {
        self.origin_focal_point
    }

    /// Current markers, in layout order (ring-major, angle-ascending).
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Monotonic counter, advanced once per completed color sweep.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Hit/miss counters of the field's color cache.
    #[inline]
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }

    /// Number of distinct colors the field has resolved so far.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Recolors every marker for `focal_point`.
    ///
    /// Saturation is recomputed from the marker's own distance on every
    /// iteration; no state leaks from one marker to the next. Non-finite
    /// focal points degrade to clamped colors rather than panicking, so one
    /// bad sensor reading cannot interrupt the animation.
    pub fn update_colors(&mut self, focal_point: Vec2) {
        for marker in &mut self.markers {
            let distance = marker.position.distance(focal_point);
            marker.gradient = self.colormap.gradient_for(distance, &mut self.cache);
        }

        self.revision += 1;
    }
}
