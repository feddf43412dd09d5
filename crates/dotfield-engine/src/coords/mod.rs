//! Geometry primitives shared across layout and color mapping.
//!
//! Canonical space:
//! - Logical pixels, container-local
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
