//! Color model for the dot field.
//!
//! Scope:
//! - display color representation (straight-alpha sRGB)
//! - HSL→HSB conversion feeding the resolver
//! - the quantized-key memoization cache
//!
//! Geometry types remain in `coords`.

pub mod cache;
pub mod color;
pub mod gradient;
pub mod hsl;

pub use cache::{ColorCache, ColorKey};
pub use color::Color;
pub use gradient::GradientPair;
pub use hsl::hsl_to_hsv;
