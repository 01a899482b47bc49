//! Smallest-period detection for a single line of colors
//!
//! Lossless images are handled with the prefix function from string
//! matching, which is exact and linear. Lossy images cannot rely on exact
//! equality, so every cyclic shift is scored and the cheapest one wins.
//!
//! Lines shorter than two pixels have no meaningful period; every detector
//! returns the line length itself for them.

use crate::math::Color;
use crate::math::color::{luma, squared_distance};

/// Finds the repeat length of a color sequence
pub trait PeriodDetector: Sync {
    /// Period of `line`, or `line.len()` when nothing shorter repeats
    fn detect(&self, line: &[Color]) -> usize;
}

/// Exact period from the prefix function, for lossless sources
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactPeriod;

/// Shift minimizing the summed squared RGB distance, for lossy sources
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorDistancePeriod;

/// Shift minimizing the summed absolute luma difference, for lossy sources
#[derive(Debug, Clone, Copy, Default)]
pub struct LumaPeriod;

/// Line-matching metric applied to every line of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Exact color equality
    #[default]
    Exact,
    /// Squared color distance over cyclic shifts
    ColorDistance,
    /// Absolute luma difference over cyclic shifts
    Luma,
}

impl Metric {
    /// Whether this metric tolerates compression noise
    pub const fn is_lossy(self) -> bool {
        !matches!(self, Self::Exact)
    }
}

impl PeriodDetector for Metric {
    fn detect(&self, line: &[Color]) -> usize {
        match self {
            Self::Exact => ExactPeriod.detect(line),
            Self::ColorDistance => ColorDistancePeriod.detect(line),
            Self::Luma => LumaPeriod.detect(line),
        }
    }
}

/// Prefix function of `line`
///
/// Entry `i` is the length of the longest proper prefix of `line[..=i]`
/// that is also a suffix of it.
pub fn failure_function(line: &[Color]) -> Vec<usize> {
    let mut failure = vec![0; line.len()];
    let mut matched = 0;

    for (i, current) in line.iter().enumerate().skip(1) {
        while matched > 0 && line.get(matched) != Some(current) {
            matched = failure.get(matched - 1).copied().unwrap_or(0);
        }
        if line.get(matched) == Some(current) {
            matched += 1;
        }
        if let Some(slot) = failure.get_mut(i) {
            *slot = matched;
        }
    }

    failure
}

impl PeriodDetector for ExactPeriod {
    fn detect(&self, line: &[Color]) -> usize {
        let border = failure_function(line).last().copied().unwrap_or(0);
        line.len() - border
    }
}

impl PeriodDetector for ColorDistancePeriod {
    fn detect(&self, line: &[Color]) -> usize {
        cheapest_shift(line.len(), |shift| {
            line.iter()
                .zip(line.iter().cycle().skip(shift))
                .map(|(&a, &b)| squared_distance(a, b))
                .sum::<u64>()
        })
    }
}

impl PeriodDetector for LumaPeriod {
    fn detect(&self, line: &[Color]) -> usize {
        let lumas: Vec<f64> = line.iter().copied().map(luma).collect();
        cheapest_shift(lumas.len(), |shift| {
            lumas
                .iter()
                .zip(lumas.iter().cycle().skip(shift))
                .map(|(a, b)| (a - b).abs())
                .sum::<f64>()
        })
    }
}

// Scores shifts 1..len in order; only a strictly smaller cost replaces the
// current best, so ties resolve to the smallest shift.
fn cheapest_shift<C, F>(len: usize, mut cost_of: F) -> usize
where
    C: PartialOrd,
    F: FnMut(usize) -> C,
{
    let mut best: Option<(usize, C)> = None;
    for shift in 1..len {
        let cost = cost_of(shift);
        if best.as_ref().is_none_or(|(_, lowest)| cost < *lowest) {
            best = Some((shift, cost));
        }
    }
    best.map_or(len, |(shift, _)| shift)
}
