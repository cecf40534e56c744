//! Outcome counts over repeated flips.

use serde::Serialize;

use crate::state::Outcome;

/// Heads/tails counts for a series of measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    heads: u64,
    tails: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Heads => self.heads += 1,
            Outcome::Tails => self.tails += 1,
        }
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Heads => self.heads,
            Outcome::Tails => self.tails,
        }
    }

    pub fn total(&self) -> u64 {
        self.heads + self.tails
    }

    /// Observed frequency of `outcome`, or 0.0 for an empty tally.
    pub fn frequency(&self, outcome: Outcome) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / total as f64
    }
}

impl Extend<Outcome> for Tally {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally() {
        let tally = Tally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.frequency(Outcome::Heads), 0.0);
    }

    #[test]
    fn test_counts_and_frequency() {
        let tally: Tally = [Outcome::Heads, Outcome::Tails, Outcome::Heads, Outcome::Heads]
            .into_iter()
            .collect();

        assert_eq!(tally.count(Outcome::Heads), 3);
        assert_eq!(tally.count(Outcome::Tails), 1);
        assert_eq!(tally.total(), 4);
        assert!((tally.frequency(Outcome::Heads) - 0.75).abs() < 1e-12);
    }
}
