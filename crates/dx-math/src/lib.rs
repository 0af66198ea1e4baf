//! Diagnostic inference math utilities.

pub mod math;

pub use math::evidence::*;
pub use math::precision::*;
