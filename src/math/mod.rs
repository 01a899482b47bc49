//! Mathematical utilities for comparing sampled colors

/// Color representation plus squared-distance and luma metrics
pub mod color;

pub use color::Color;
