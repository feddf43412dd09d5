//! Dotfield engine crate.
//!
//! This crate owns the algorithmic pieces of the dot-field gradient effect:
//! ring layout, distance-to-color mapping, and the field coordinator that
//! ties them together. Rendering and sensor plumbing live with the consumer.

pub mod coords;
pub mod math;
pub mod paint;

pub mod colormap;
pub mod field;
pub mod layout;
pub mod motion;

pub mod logging;
pub mod time;
