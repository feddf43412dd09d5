//! The dot field: marker storage plus the per-update recolor sweep.

mod card;
mod marker;

pub use card::Field;
pub use marker::Marker;
