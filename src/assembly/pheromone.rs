//! Pheromone trail over fragment-to-fragment edges.
//!
//! The colony owns a baseline field. Each agent gets a working copy of the
//! round-start snapshot, deposits on the edges it walks, and hands the copy
//! back. After every agent of the round has finished, the copies are merged
//! into the baseline in one single-threaded step.

use ndarray::Array2;

/// Square matrix of trail strengths, indexed like the weight matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    trail: Array2<f64>,
}

/// What a merge did to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOutcome {
    /// Largest single-cell deposit across all working copies.
    pub divide: f64,
    /// `false` when nothing was deposited and only evaporation applied.
    pub reinforced: bool,
}

impl PheromoneField {
    /// Creates a `size x size` field filled with `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            trail: Array2::from_elem((size, size), initial),
        }
    }

    /// Trail strength on the edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trail[[from, to]]
    }

    /// Adds `amount` to the edge `from -> to`.
    #[inline]
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.trail[[from, to]] += amount;
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.trail.nrows()
    }

    /// Underlying matrix.
    pub fn trail(&self) -> &Array2<f64> {
        &self.trail
    }

    /// Largest trail strength in the field.
    pub fn max(&self) -> f64 {
        self.trail.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest trail strength in the field.
    pub fn min(&self) -> f64 {
        self.trail.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Merges agent working copies into this baseline and evaporates.
    ///
    /// Every copy was taken from this baseline at round start, so its delta is
    /// the copy minus the baseline. Deltas are normalized by the largest single
    /// deposit of the round, summed, added to the baseline and the result is
    /// scaled by `1 - evaporation`, then clamped to `[0, cap]`. When no copy
    /// carries a deposit the round only evaporates.
    ///
    /// # Arguments
    ///
    /// * `copies` - Working copies returned by the agents of one round
    /// * `evaporation` - Fraction of the trail lost, in `[0, 1)`
    /// * `cap` - Upper clamp for every cell
    pub fn merge(&mut self, copies: &[PheromoneField], evaporation: f64, cap: f64) -> MergeOutcome {
        let mut reinforcement: Array2<f64> = Array2::zeros(self.trail.raw_dim());
        let mut divide = 0.0_f64;

        for copy in copies {
            let delta = (&copy.trail - &self.trail).mapv(|d| d.max(0.0));
            divide = delta.iter().copied().fold(divide, f64::max);
            reinforcement += &delta;
        }

        let reinforced = divide > 0.0;
        if reinforced {
            reinforcement /= divide;
            self.trail += &reinforcement;
        }

        let retain = 1.0 - evaporation;
        self.trail
            .par_mapv_inplace(|strength| (strength * retain).clamp(0.0, cap));

        MergeOutcome { divide, reinforced }
    }
}
