//! Fixed-cadence pacing for motion sources.

mod cadence;

pub use cadence::{Cadence, Tick};
