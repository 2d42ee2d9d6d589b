//! Aggregation of classification outcomes across a batch of tickets.

use std::collections::BTreeMap;

use crate::domain::{Payouts, Rank};

/// Win counts across a batch of classified tickets.
///
/// Built once from an iterator of classification outcomes; `None` entries
/// count toward the ticket total but win nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    counts: BTreeMap<Rank, u64>,
    tickets: u64,
}

impl Statistics {
    /// Tallies a batch of classification outcomes.
    #[must_use]
    pub fn tally<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Option<Rank>>,
    {
        let mut stats = Self::default();
        for result in results {
            stats.tickets += 1;
            if let Some(rank) = result {
                *stats.counts.entry(rank).or_insert(0) += 1;
            }
        }
        stats
    }

    /// The number of tickets that won the given rank.
    #[must_use]
    pub fn count(&self, rank: Rank) -> u64 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    /// The total number of tickets tallied, winners or not.
    #[must_use]
    pub const fn tickets(&self) -> u64 {
        self.tickets
    }

    /// Total prize money under the given payout table.
    #[must_use]
    pub fn winnings(&self, payouts: &Payouts) -> u64 {
        self.counts
            .iter()
            .map(|(rank, count)| payouts.amount(*rank) * count)
            .sum()
    }

    /// Return on the amount spent, as a percentage.
    ///
    /// Zero spend yields zero rather than dividing by it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn yield_rate(&self, payouts: &Payouts, spent: u64) -> f64 {
        if spent == 0 {
            return 0.0;
        }
        self.winnings(payouts) as f64 / spent as f64 * 100.0
    }
}
