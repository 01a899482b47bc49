//! Tile inference for images of repeating patterns
//!
//! Every row and every column is scanned for the smallest repeat length of
//! its colors. The per-line periods are tallied per axis, one period is
//! chosen under a tolerance rule, and the resulting rectangle is cut out of
//! the source as the tile.

#![forbid(unsafe_code)]

/// Period detection, parallel scanning, aggregation and selection
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Color representation and distance metrics
pub mod math;
/// Line sampling and tile cropping
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
