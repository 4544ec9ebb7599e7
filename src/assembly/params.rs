use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters that control instance generation and the colony search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of agents spawned per round.
    pub ant_count: usize,
    /// Pheromone deposited on every edge an agent walks.
    pub alpha: f64,
    /// Fraction of the trail lost per round, in `[0, 1)`.
    pub evaporation_coefficient: f64,
    /// Number of rounds to run.
    pub iterations: usize,
    /// Length of the generated ground-truth sequence.
    pub sequence_length: usize,
    /// Fragment (oligonucleotide) length.
    pub oligo_size: usize,
    /// Range widening as a fraction of the sequence length, in `[0, 1]`.
    pub percent: f64,
    /// Add `floor(0.1 * sequence_length)` random false-positive fragments.
    pub inject_phantoms: bool,
    /// Best-of-batch candidates are accepted only below this overlap cost.
    ///
    /// The cost does not scale with `oligo_size`; raise it for long fragments.
    pub acceptance_threshold: usize,
    /// Uniform trail strength of a fresh pheromone field.
    pub initial_pheromone: f64,
    /// Upper clamp applied to every trail cell after a merge.
    pub pheromone_cap: f64,
    /// Candidate draws per step are bounded by `retry_factor * sequence_length`.
    pub retry_factor: usize,
    /// Seed for deterministic replay. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Run the agents of a round on the rayon pool.
    pub parallel: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            ant_count: 50,
            alpha: 12.0,
            evaporation_coefficient: 0.4,
            iterations: 80,
            sequence_length: 500,
            oligo_size: 9,
            percent: 0.05,
            inject_phantoms: false,
            acceptance_threshold: 5,
            initial_pheromone: 0.1,
            pheromone_cap: 100.0,
            retry_factor: 3,
            seed: None,
            parallel: true,
        }
    }
}

impl Params {
    /// Checks every parameter range before a run starts.
    pub fn validate(&self) -> Result<()> {
        positive("ant_count", self.ant_count)?;
        positive("iterations", self.iterations)?;
        positive("sequence_length", self.sequence_length)?;
        positive("oligo_size", self.oligo_size)?;
        positive("acceptance_threshold", self.acceptance_threshold)?;
        positive("retry_factor", self.retry_factor)?;

        if self.oligo_size > self.sequence_length {
            return Err(Error::OligoLongerThanSequence {
                oligo_size: self.oligo_size,
                sequence_length: self.sequence_length,
            });
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(invalid("alpha", "must be a positive number"));
        }
        if !(0.0..1.0).contains(&self.evaporation_coefficient) {
            return Err(invalid("evaporation_coefficient", "must lie in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.percent) {
            return Err(invalid("percent", "must lie in [0, 1]"));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(invalid("initial_pheromone", "must be a positive number"));
        }
        if !(self.pheromone_cap.is_finite() && self.pheromone_cap >= self.initial_pheromone) {
            return Err(invalid(
                "pheromone_cap",
                "must be finite and at least `initial_pheromone`",
            ));
        }
        Ok(())
    }

    /// Maximum number of candidate draws an agent makes for a single step.
    pub fn retry_limit(&self) -> usize {
        self.retry_factor * self.sequence_length
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}

fn positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid(name, "must be a positive integer"));
    }
    Ok(())
}

fn invalid(name: &'static str, reason: &str) -> Error {
    Error::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}
