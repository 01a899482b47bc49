//! Tests for tallying per-line periods

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tileex::algorithm::frequency::{FrequencyPair, FrequencyTable};

    fn count_of(table: &FrequencyTable, period: usize) -> usize {
        table
            .pairs()
            .iter()
            .find(|pair| pair.period == period)
            .map_or(0, |pair| pair.count)
    }

    // Tests each distinct period is counted once with its multiplicity
    // Verified by counting distinct periods instead of occurrences
    #[test]
    fn test_from_periods_counts() {
        let table = FrequencyTable::from_periods([4, 4, 7, 4]);

        assert_eq!(
            table.pairs(),
            &[
                FrequencyPair {
                    period: 4,
                    count: 3
                },
                FrequencyPair {
                    period: 7,
                    count: 1
                },
            ]
        );
        assert_eq!(table.total(), 4);
        assert_eq!(count_of(&table, 7), 1);
        assert_eq!(count_of(&table, 9), 0);
    }

    // Tests counts always sum to the number of lines tallied
    // Verified by skipping the first period
    #[test]
    fn test_counts_sum_to_total() {
        let mut rng = StdRng::seed_from_u64(3);
        for lines in [1, 17, 256, 1000] {
            let periods: Vec<usize> = (0..lines).map(|_| rng.random_range(1..40)).collect();
            let table = FrequencyTable::from_periods(periods);

            let summed: usize = table.pairs().iter().map(|pair| pair.count).sum();
            assert_eq!(summed, lines);
            assert_eq!(table.total(), lines);
            assert!(table.pairs().iter().all(|pair| pair.count >= 1));
        }
    }

    // Tests sentinel periods are tallied like any other value
    // Verified by filtering out zero periods
    #[test]
    fn test_sentinel_periods_are_kept() {
        let table = FrequencyTable::from_periods([0, 0, 1]);

        assert_eq!(count_of(&table, 0), 2);
        assert_eq!(count_of(&table, 1), 1);
        assert_eq!(table.total(), 3);
    }

    // Tests an empty scan produces an empty table
    // Verified by seeding the table with a default pair
    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_periods(Vec::new());

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.pairs().is_empty());
        assert_eq!(table, FrequencyTable::default());
    }

    // Tests pre-counted pairs are merged and zero counts dropped
    // Verified by keeping duplicate periods as separate pairs
    #[test]
    fn test_from_pairs_merges() {
        let table = FrequencyTable::from_pairs([
            FrequencyPair {
                period: 4,
                count: 60,
            },
            FrequencyPair {
                period: 7,
                count: 0,
            },
            FrequencyPair {
                period: 4,
                count: 30,
            },
            FrequencyPair {
                period: 9,
                count: 10,
            },
        ]);

        assert_eq!(table.total(), 100);
        assert_eq!(count_of(&table, 4), 90);
        assert_eq!(count_of(&table, 7), 0);
        assert_eq!(table.pairs().len(), 2);
    }

    // Tests per-line tallies and pre-counted pairs agree
    // Verified by dropping the last line of each period in the tally
    #[test]
    fn test_from_periods_matches_unit_pairs() {
        let periods = [3, 5, 3, 3, 8, 5];
        let tallied = FrequencyTable::from_periods(periods);
        let paired = FrequencyTable::from_pairs([
            FrequencyPair {
                period: 3,
                count: 3,
            },
            FrequencyPair {
                period: 5,
                count: 2,
            },
            FrequencyPair {
                period: 8,
                count: 1,
            },
        ]);

        assert_eq!(tallied, paired);
        assert_eq!(tallied.total(), periods.len());
    }
}
