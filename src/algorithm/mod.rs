/// Pipeline orchestration from image to extracted tile
pub mod executor;
/// Tallying per-line periods
pub mod frequency;
/// Per-line period detectors
pub mod period;
/// Parallel scanning of every row or column
pub mod scanner;
/// Tolerance-based choice of one period per axis
pub mod selection;
