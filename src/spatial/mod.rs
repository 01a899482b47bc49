//! Geometry of the source image
//!
//! This module contains spatial-related functionality including:
//! - Sampling rows and columns as color sequences
//! - Tile rectangle validation and extraction

/// Tile rectangle arithmetic and cropping
pub mod crop;
/// Row and column sampling
pub mod line;

pub use crop::TileSpec;
pub use line::{Axis, SampleImage};
