//! Ledger of finished rounds.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::result::{RoundResult, Winner};

/// Number of rounds statistics views show.
pub const RECENT_RESULTS_LIMIT: usize = 10;

/// Append-only record of finished rounds, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    results: Vec<RoundResult>,
}

/// Win/loss counts over a history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    /// Rounds recorded.
    pub rounds: usize,
    /// Rounds the player won.
    pub player_wins: usize,
    /// Rounds the dealer won.
    pub dealer_wins: usize,
    /// Tied rounds.
    pub ties: usize,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a finished round.
    pub fn record(&mut self, result: RoundResult) {
        self.results.push(result);
    }

    /// Returns every recorded round in chronological order.
    #[must_use]
    pub fn all(&self) -> &[RoundResult] {
        &self.results
    }

    /// Returns the last `min(n, len)` rounds, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[RoundResult] {
        let start = self.results.len().saturating_sub(n);
        &self.results[start..]
    }

    /// Returns the number of recorded rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether no round has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Counts wins per side over the whole history.
    #[must_use]
    pub fn summary(&self) -> HistorySummary {
        self.results
            .iter()
            .fold(HistorySummary::default(), |mut summary, result| {
                summary.rounds += 1;
                match result.winner() {
                    Winner::Player => summary.player_wins += 1,
                    Winner::Dealer => summary.dealer_wins += 1,
                    Winner::Tie => summary.ties += 1,
                }
                summary
            })
    }
}

impl From<Vec<RoundResult>> for History {
    fn from(results: Vec<RoundResult>) -> Self {
        Self { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Outcome;

    fn result(player_score: u16, dealer_score: u16) -> RoundResult {
        RoundResult {
            outcome: Outcome::decide(player_score, dealer_score),
            player_score,
            dealer_score,
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
        }
    }

    #[test]
    fn recent_is_chronological_tail() {
        let mut history = History::new();
        for score in 4..=18 {
            history.record(result(score, 17));
        }
        assert_eq!(history.len(), 15);

        let recent = history.recent(RECENT_RESULTS_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].player_score, 9);
        assert_eq!(recent[9].player_score, 18);
        assert_eq!(history.all()[0].player_score, 4);
    }

    #[test]
    fn recent_shorter_than_limit() {
        let mut history = History::new();
        history.record(result(20, 18));
        history.record(result(15, 19));
        let recent = history.recent(RECENT_RESULTS_LIMIT);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].player_score, 20);
        assert!(History::new().recent(3).is_empty());
    }

    #[test]
    fn summary_counts_each_side() {
        let history: History = alloc::vec![
            result(20, 18),
            result(22, 18),
            result(19, 23),
            result(18, 18),
        ]
        .into();
        let summary = history.summary();
        assert_eq!(summary.rounds, 4);
        assert_eq!(summary.player_wins, 2);
        assert_eq!(summary.dealer_wins, 1);
        assert_eq!(summary.ties, 1);
    }
}
