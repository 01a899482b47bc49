//! Choosing one period per axis from ranked frequency pairs

use crate::algorithm::frequency::{FrequencyPair, FrequencyTable};
use crate::io::configuration::DEFAULT_TOLERANCE_PERCENT;
use crate::io::error::{Result, computation_error, invalid_parameter};
use std::cmp::Reverse;

/// Acceptance rule applied to one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    /// Rank by occurrence count and take the most frequent period outright
    pub prefer_frequency: bool,
    /// Minimum share of lines, in `[0, 1]`, a period needs to be accepted
    pub tolerance: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            prefer_frequency: false,
            tolerance: DEFAULT_TOLERANCE_PERCENT / 100.0,
        }
    }
}

impl SelectionPolicy {
    /// Create a policy from a tolerance fraction
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not a finite value in `[0, 1]`
    pub fn new(prefer_frequency: bool, tolerance: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(invalid_parameter(
                "tolerance",
                &tolerance,
                &"must be a fraction between 0 and 1",
            ));
        }
        Ok(Self {
            prefer_frequency,
            tolerance,
        })
    }

    /// Create a policy from a tolerance given in percent
    ///
    /// # Errors
    ///
    /// Returns an error if `percent` is not a finite value in `[0, 100]`
    pub fn from_percent(prefer_frequency: bool, percent: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(invalid_parameter(
                "tolerance",
                &percent,
                &"must be a percentage between 0 and 100",
            ));
        }
        Self::new(prefer_frequency, percent / 100.0)
    }

    /// Tolerance actually applied; preferring frequency forces it to zero
    pub const fn effective_tolerance(&self) -> f64 {
        if self.prefer_frequency {
            0.0
        } else {
            self.tolerance
        }
    }
}

/// Period chosen for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Chosen period
    pub period: usize,
    /// Lines that produced the chosen period
    pub count: usize,
    /// Lines scanned on this axis
    pub total: usize,
    /// Whether the period met the tolerance, rather than being the
    /// wrapped-around fallback
    pub met_tolerance: bool,
}

impl Selection {
    /// Fraction of lines that produced the chosen period
    pub fn share(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }

    /// Share of lines as a percentage
    pub fn share_percent(&self) -> f64 {
        self.share() * 100.0
    }
}

/// Order pairs from most to least preferred
///
/// Without frequency preference the largest period ranks first. With it the
/// highest count ranks first, and equal counts fall back to the larger period.
pub fn rank_pairs(table: &FrequencyTable, prefer_frequency: bool) -> Vec<FrequencyPair> {
    let mut ranked = table.pairs().to_vec();
    if prefer_frequency {
        ranked.sort_by_key(|pair| (Reverse(pair.count), Reverse(pair.period)));
    } else {
        ranked.sort_by_key(|pair| Reverse(pair.period));
    }
    ranked
}

/// Walk the ranking and take the first pair whose share meets the tolerance
///
/// When no pair qualifies the scan wraps around to the top-ranked pair, which
/// is still returned with its real share and `met_tolerance` unset.
///
/// # Errors
///
/// Returns an error if the table holds no lines
pub fn select_period(table: &FrequencyTable, policy: &SelectionPolicy) -> Result<Selection> {
    let ranked = rank_pairs(table, policy.prefer_frequency);
    if ranked.is_empty() || table.is_empty() {
        return Err(computation_error(
            "period selection",
            &"no lines were scanned",
        ));
    }

    let total = table.total();
    let tolerance = policy.effective_tolerance();
    let qualifying = ranked
        .iter()
        .position(|pair| pair.count as f64 / total as f64 >= tolerance);

    let index = qualifying.unwrap_or(ranked.len()) % ranked.len();
    let pair = ranked
        .get(index)
        .copied()
        .ok_or_else(|| computation_error("period selection", &"ranking index out of range"))?;

    Ok(Selection {
        period: pair.period,
        count: pair.count,
        total,
        met_tolerance: qualifying.is_some(),
    })
}
