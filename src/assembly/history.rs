//! Round-over-round convergence diagnostics.

use serde::{Deserialize, Serialize};

/// Summary of one colony round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Zero-based round number.
    pub round: usize,
    /// Lowest edit distance produced by an ant this round.
    pub best_in_round: usize,
    /// Mean edit distance over the ants of this round.
    pub mean_distance: f64,
    /// Lowest edit distance seen in any round so far.
    pub best_so_far: usize,
    /// Moves accepted through the draw-budget escape, summed over ants.
    pub fallbacks: usize,
    /// `false` when the pheromone merge only evaporated.
    pub reinforced: bool,
}

/// Every round summary of a run, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceHistory {
    rounds: Vec<RoundStats>,
}

impl ConvergenceHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round summary.
    pub fn record(&mut self, stats: RoundStats) {
        self.rounds.push(stats);
    }

    /// All recorded rounds.
    pub fn rounds(&self) -> &[RoundStats] {
        &self.rounds
    }

    /// Most recent round, if any.
    pub fn last(&self) -> Option<&RoundStats> {
        self.rounds.last()
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns `true` before the first round.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Checks that the best-so-far distance never grew between rounds.
    pub fn is_non_increasing(&self) -> bool {
        self.rounds
            .windows(2)
            .all(|pair| pair[1].best_so_far <= pair[0].best_so_far)
    }

    /// Number of rounds that lowered the best-so-far distance.
    pub fn improvements(&self) -> usize {
        let mut previous = usize::MAX;
        let mut count = 0;
        for stats in &self.rounds {
            if stats.best_so_far < previous {
                count += 1;
                previous = stats.best_so_far;
            }
        }
        count
    }

    /// Total escape acceptances over the whole run.
    pub fn total_fallbacks(&self) -> usize {
        self.rounds.iter().map(|stats| stats.fallbacks).sum()
    }
}
