//! Tallying per-line periods into frequency pairs

use std::collections::BTreeMap;

/// How many lines produced a given period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyPair {
    /// Detected period
    pub period: usize,
    /// Number of lines that produced it (always at least one)
    pub count: usize,
}

/// Distinct periods for one axis together with the number of lines scanned
///
/// Every line contributes to exactly one pair, so the counts always sum to
/// `total`. Pairs are kept in ascending period order; callers that need a
/// ranking sort them themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    pairs: Vec<FrequencyPair>,
    total: usize,
}

impl FrequencyTable {
    /// Tally one period per scanned line
    pub fn from_periods<I>(periods: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self::from_pairs(
            periods
                .into_iter()
                .map(|period| FrequencyPair { period, count: 1 }),
        )
    }

    /// Build a table from pre-counted pairs
    ///
    /// Repeated periods are merged and zero counts dropped.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = FrequencyPair>,
    {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for pair in pairs.into_iter().filter(|pair| pair.count > 0) {
            *counts.entry(pair.period).or_default() += pair.count;
        }

        let total = counts.values().sum();
        let pairs = counts
            .into_iter()
            .map(|(period, count)| FrequencyPair { period, count })
            .collect();

        Self { pairs, total }
    }

    /// Distinct periods with their counts
    pub fn pairs(&self) -> &[FrequencyPair] {
        &self.pairs
    }

    /// Number of lines tallied
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether no lines were tallied
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
