//! Runtime configuration defaults

use std::num::NonZeroUsize;

/// Default source image path
pub const DEFAULT_INPUT: &str = "input.png";
/// Default destination for the extracted tile
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Minimum share of lines, in percent, a period needs by default
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 0.1;

/// Default horizontal and vertical crop offset
pub const DEFAULT_OFFSET: u32 = 0;

// Extension sniffing only applies when neither --lossy nor --lossless is given
/// File extension treated as lossless
pub const LOSSLESS_EXTENSION: &str = "png";

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Worker count used when none is configured: the host's available parallelism
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
