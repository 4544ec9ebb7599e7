//! Agent traversal of the fragment graph.
//!
//! An ant starts on the starter fragment and keeps moving until the sequence
//! it has covered spans the target length. Each move must land inside one of
//! the candidate's remaining position intervals, and that interval is consumed.
//! The first round explores uniformly; later rounds sample by pheromone and
//! keep the cheapest of a small batch. A per-step draw budget guarantees that
//! every walk terminates: once it is spent, the last drawn candidate is taken
//! even though it failed validation.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use tracing::trace;

use super::generator::Interval;
use super::params::Params;
use super::pheromone::PheromoneField;
use super::random::RandomSource;
use super::weights::WeightIndex;

/// Candidate selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Uniform draws; used while the trail carries no signal yet.
    Exploration,
    /// Pheromone-weighted batches, keeping the lowest overlap cost.
    Exploitation,
}

impl Mode {
    /// Policy for the given zero-based round.
    pub fn for_round(round: usize) -> Self {
        if round == 0 {
            Mode::Exploration
        } else {
            Mode::Exploitation
        }
    }
}

/// Lifecycle of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet on the starter fragment.
    Start,
    /// Moving between fragments.
    Traveling,
    /// The covered length reached the target, or nothing is left to visit.
    Done,
}

/// Everything an ant hands back to the colony.
#[derive(Debug, Clone)]
pub struct AntOutcome {
    /// Visited fragments in order, starting with the starter.
    pub route: Vec<String>,
    /// Working copy of the pheromone field with this ant's deposits.
    pub pheromone: PheromoneField,
    /// Position reached after every move.
    pub cover_spots: Vec<usize>,
    /// Moves accepted through the draw-budget escape.
    pub fallbacks: usize,
}

/// A single agent with private copies of all mutable state.
pub struct Ant<'a> {
    index: &'a WeightIndex,
    params: &'a Params,
    ranges: Vec<Vec<Interval>>,
    remaining: Vec<usize>,
    pheromone: PheromoneField,
    mode: Mode,
    phase: Phase,
    starter: usize,
    current: usize,
    position: usize,
    route: Vec<usize>,
    cover_spots: Vec<usize>,
    fallbacks: usize,
    rng: RandomSource,
}

impl<'a> Ant<'a> {
    /// Creates an ant that has not moved yet.
    ///
    /// # Arguments
    ///
    /// * `index` - Shared weight matrix and translation table
    /// * `params` - Run parameters (target length, deposit, thresholds)
    /// * `ranges` - Private copy of the intervals, one entry per fragment of
    ///   `index` in the same order
    /// * `pheromone` - Private working copy of the round-start trail
    /// * `starter` - Index of the starter fragment
    /// * `mode` - Candidate selection policy
    /// * `rng` - Private random source
    ///
    /// # Panics
    ///
    /// Panics if `ranges` is not aligned to `index`.
    pub fn new(
        index: &'a WeightIndex,
        params: &'a Params,
        ranges: Vec<Vec<Interval>>,
        pheromone: PheromoneField,
        starter: usize,
        mode: Mode,
        rng: RandomSource,
    ) -> Self {
        assert_eq!(
            ranges.len(),
            index.len(),
            "position ranges must be aligned to the weight index"
        );
        let remaining = (0..index.len())
            .filter(|&i| !ranges[i].is_empty())
            .collect();

        Self {
            index,
            params,
            ranges,
            remaining,
            pheromone,
            mode,
            phase: Phase::Start,
            starter,
            current: starter,
            position: 0,
            route: Vec::new(),
            cover_spots: Vec::new(),
            fallbacks: 0,
            rng,
        }
    }

    /// Walks until done and returns the route with the deposited trail.
    pub fn run(mut self) -> AntOutcome {
        while self.step() != Phase::Done {}

        let route = self
            .route
            .iter()
            .map(|&i| self.index.fragment(i).to_string())
            .collect();

        AntOutcome {
            route,
            pheromone: self.pheromone,
            cover_spots: self.cover_spots,
            fallbacks: self.fallbacks,
        }
    }

    /// Performs one transition of the state machine and returns the new phase.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Start => {
                self.start();
                self.check_done()
            }
            Phase::Traveling => {
                self.travel();
                self.check_done()
            }
            Phase::Done => Phase::Done,
        };
        self.phase
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Summed overlap cost along the route so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of sequence the route spans so far.
    pub fn covered(&self) -> usize {
        self.params.oligo_size + self.position
    }

    /// Fragment indices still available for a move.
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    fn start(&mut self) {
        let starter = self.starter;
        if let Some(slot) = self.ranges[starter].iter().position(|r| r.contains(0)) {
            self.ranges[starter].remove(slot);
        }
        self.retire_if_consumed(starter);

        self.current = starter;
        self.route.push(starter);
        self.cover_spots.push(self.position);
    }

    fn travel(&mut self) {
        if self.remaining.is_empty() {
            trace!(position = self.position, "no fragments left, ending walk");
            self.phase = Phase::Done;
            return;
        }

        let next = match self.mode {
            Mode::Exploration => self.choose_exploring(),
            Mode::Exploitation => self.choose_exploiting(),
        };
        self.advance(next);
    }

    fn check_done(&self) -> Phase {
        if self.phase == Phase::Done || self.covered() >= self.params.sequence_length {
            Phase::Done
        } else {
            Phase::Traveling
        }
    }

    /// Uniform draws without repeating a candidate rejected in this step.
    fn choose_exploring(&mut self) -> usize {
        let mut pool = self.remaining.clone();
        let mut last = None;

        for _ in 0..self.params.retry_limit() {
            if pool.is_empty() {
                break;
            }
            let candidate = pool.swap_remove(self.rng.random_range(0..pool.len()));
            if self.claim(candidate) {
                return candidate;
            }
            last = Some(candidate);
        }

        self.escape(last)
    }

    /// Pheromone-weighted batches of `oligo_size` draws, keeping the cheapest.
    fn choose_exploiting(&mut self) -> usize {
        let weights: Vec<f64> = self
            .remaining
            .iter()
            .map(|&candidate| self.pheromone.get(self.current, candidate))
            .collect();
        let Ok(mut sampler) = WeightedIndex::<f64>::new(&weights) else {
            return self.escape(None);
        };

        let mut last = None;
        for _ in 0..self.params.retry_limit() {
            let slot = (0..self.params.oligo_size)
                .map(|_| sampler.sample(&mut self.rng))
                .min_by_key(|&slot| self.index.weight(self.current, self.remaining[slot]))
                .unwrap_or_else(|| sampler.sample(&mut self.rng));
            let candidate = self.remaining[slot];
            last = Some(candidate);

            let cost = self.index.weight(self.current, candidate);
            if cost < self.params.acceptance_threshold && self.claim(candidate) {
                return candidate;
            }
            if sampler.update_weights(&[(slot, &0.0)]).is_err() {
                break;
            }
        }

        self.escape(last)
    }

    /// Consumes the interval of `candidate` that holds its landing position.
    fn claim(&mut self, candidate: usize) -> bool {
        let landing = self.position + self.index.weight(self.current, candidate);
        match self.ranges[candidate].iter().position(|r| r.contains(landing)) {
            Some(slot) => {
                self.ranges[candidate].remove(slot);
                true
            }
            None => false,
        }
    }

    fn escape(&mut self, last: Option<usize>) -> usize {
        self.fallbacks += 1;
        let candidate = last.unwrap_or_else(|| {
            self.remaining[self.rng.random_range(0..self.remaining.len())]
        });
        trace!(
            position = self.position,
            fragment = self.index.fragment(candidate),
            "draw budget spent, accepting last candidate"
        );
        candidate
    }

    fn advance(&mut self, next: usize) {
        let cost = self.index.weight(self.current, next);
        self.position += cost;
        self.pheromone.deposit(self.current, next, self.params.alpha);
        self.route.push(next);
        self.cover_spots.push(self.position);
        self.retire_if_consumed(next);
        self.current = next;
    }

    fn retire_if_consumed(&mut self, fragment: usize) {
        if self.ranges[fragment].is_empty() {
            self.remaining.retain(|&i| i != fragment);
        }
    }
}
