//! Colony orchestration.
//!
//! The colony owns the instance, the derived weight index and the baseline
//! pheromone field. Each round it:
//! - spawns `ant_count` ants from the same baseline snapshot, on rayon when enabled
//! - waits for all of them, scores every route against the ground truth
//! - keeps the best reconstruction seen so far
//! - merges the ants' deposits into the baseline and evaporates once

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ant::{Ant, AntOutcome, Mode};
use super::assembler::assemble;
use super::distance::levenshtein;
use super::generator::{Instance, Interval};
use super::history::{ConvergenceHistory, RoundStats};
use super::params::Params;
use super::pheromone::PheromoneField;
use super::random::{self, RandomSource};
use super::weights::WeightIndex;
use crate::error::{Error, Result};

/// Best reconstruction found by a colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Assembled sequence.
    pub sequence: String,
    /// Route the sequence was assembled from.
    pub route: Vec<String>,
    /// Edit distance to the ground truth.
    pub distance: usize,
    /// Round in which the route was found.
    pub round: usize,
    /// Length of the ground truth.
    pub sequence_length: usize,
}

impl Solution {
    /// Edit distance relative to the sequence length, in percent.
    pub fn error_percent(&self) -> f64 {
        self.distance as f64 / self.sequence_length as f64 * 100.0
    }

    /// Returns `true` if the ground truth was reconstructed exactly.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// An ant's outcome together with its score.
struct Scored {
    outcome: AntOutcome,
    sequence: String,
    distance: usize,
}

/// Ant colony searching for the fragment order that rebuilds the sequence.
pub struct Colony {
    params: Params,
    instance: Instance,
    index: WeightIndex,
    ranges: Vec<Vec<Interval>>,
    starter: usize,
    pheromone: PheromoneField,
    best: Option<Solution>,
    history: ConvergenceHistory,
    rng: RandomSource,
    round: usize,
}

impl Colony {
    /// Validates `params`, generates an instance and prepares the first round.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;
        let mut rng = random::seeded(params.seed);
        let instance = Instance::generate(&params, &mut rng)?;
        Self::with_instance(params, instance, rng)
    }

    /// Prepares a colony over an existing instance.
    ///
    /// # Errors
    ///
    /// Fails when `params` are invalid, when the instance sizes disagree with
    /// them, or when the starter is missing from the spectrum.
    pub fn with_instance(params: Params, instance: Instance, rng: RandomSource) -> Result<Self> {
        params.validate()?;
        if instance.oligo_size != params.oligo_size {
            return Err(Error::InstanceMismatch(format!(
                "fragment size {} vs oligo_size {}",
                instance.oligo_size, params.oligo_size
            )));
        }
        if instance.sequence.len() != params.sequence_length {
            return Err(Error::InstanceMismatch(format!(
                "sequence length {} vs sequence_length {}",
                instance.sequence.len(),
                params.sequence_length
            )));
        }

        let index = WeightIndex::build(&instance.spectrum)?;
        let starter = index
            .index_of(&instance.starter)
            .ok_or_else(|| Error::StarterNotInSpectrum(instance.starter.clone()))?;
        let ranges = instance.ranges.aligned_to(&instance.spectrum);
        let pheromone = PheromoneField::new(index.len(), params.initial_pheromone);

        info!(
            sequence_length = params.sequence_length,
            oligo_size = params.oligo_size,
            spectrum = index.len(),
            phantoms = instance.phantoms.len(),
            "colony ready"
        );

        Ok(Self {
            params,
            instance,
            index,
            ranges,
            starter,
            pheromone,
            best: None,
            history: ConvergenceHistory::new(),
            rng,
            round: 0,
        })
    }

    /// Runs the configured number of rounds and returns the best solution.
    pub fn run(&mut self) -> Result<Solution> {
        for _ in 0..self.params.iterations {
            self.run_round()?;
        }

        let best = self.solution()?;
        info!(
            distance = best.distance,
            error_percent = best.error_percent(),
            round = best.round,
            "run finished"
        );
        Ok(best)
    }

    /// Runs a single round: spawn, walk, score, merge.
    pub fn run_round(&mut self) -> Result<RoundStats> {
        let mode = Mode::for_round(self.round);
        let seeds: Vec<u64> = (0..self.params.ant_count)
            .map(|_| self.rng.random())
            .collect();

        let scored: Vec<Scored> = if self.params.parallel {
            seeds
                .into_par_iter()
                .map(|seed| self.dispatch(seed, mode))
                .collect::<Result<_>>()?
        } else {
            seeds
                .into_iter()
                .map(|seed| self.dispatch(seed, mode))
                .collect::<Result<_>>()?
        };

        let mut best_in_round = usize::MAX;
        let mut total = 0usize;
        let mut fallbacks = 0usize;
        for entry in &scored {
            best_in_round = best_in_round.min(entry.distance);
            total += entry.distance;
            fallbacks += entry.outcome.fallbacks;

            let improves = self
                .best
                .as_ref()
                .is_none_or(|best| entry.distance < best.distance);
            if improves {
                info!(round = self.round, distance = entry.distance, "new best solution");
                self.best = Some(Solution {
                    sequence: entry.sequence.clone(),
                    route: entry.outcome.route.clone(),
                    distance: entry.distance,
                    round: self.round,
                    sequence_length: self.params.sequence_length,
                });
            }
        }

        let copies: Vec<PheromoneField> = scored
            .into_iter()
            .map(|entry| entry.outcome.pheromone)
            .collect();
        let merge = self.pheromone.merge(
            &copies,
            self.params.evaporation_coefficient,
            self.params.pheromone_cap,
        );

        let stats = RoundStats {
            round: self.round,
            best_in_round,
            mean_distance: total as f64 / copies.len() as f64,
            best_so_far: self.best.as_ref().map_or(best_in_round, |best| best.distance),
            fallbacks,
            reinforced: merge.reinforced,
        };
        debug!(
            round = stats.round,
            best_in_round = stats.best_in_round,
            mean = stats.mean_distance,
            best_so_far = stats.best_so_far,
            fallbacks = stats.fallbacks,
            divide = merge.divide,
            "round finished"
        );

        self.history.record(stats);
        self.round += 1;
        Ok(stats)
    }

    /// Walks one ant from the round-start snapshot and scores its route.
    fn dispatch(&self, seed: u64, mode: Mode) -> Result<Scored> {
        let ant = Ant::new(
            &self.index,
            &self.params,
            self.ranges.clone(),
            self.pheromone.clone(),
            self.starter,
            mode,
            random::seeded(Some(seed)),
        );
        let outcome = ant.run();
        let sequence = assemble(&outcome.route)?;
        let distance = levenshtein(&sequence, &self.instance.sequence);

        Ok(Scored {
            outcome,
            sequence,
            distance,
        })
    }

    /// Best solution found so far.
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Owned copy of the best solution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] before the first round has completed.
    pub fn solution(&self) -> Result<Solution> {
        self.best.clone().ok_or(Error::NoSolution)
    }

    /// Generated instance, including the ground truth.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Derived weight matrix and translation table.
    pub fn weight_index(&self) -> &WeightIndex {
        &self.index
    }

    /// Baseline pheromone field.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// Round-over-round diagnostics.
    pub fn history(&self) -> &ConvergenceHistory {
        &self.history
    }

    /// Parameters the colony runs with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of rounds completed.
    pub fn rounds_completed(&self) -> usize {
        self.round
    }
}

/// Builds a colony from `params`, runs it and returns the best solution.
pub fn run(params: &Params) -> Result<Solution> {
    Colony::new(params.clone())?.run()
}
