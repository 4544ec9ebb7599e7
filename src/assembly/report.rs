//! Serializable summary of a finished run.
//!
//! The report keeps the full instance, so a run can be replayed with
//! [`Colony::with_instance`](super::colony::Colony::with_instance).

use serde::{Deserialize, Serialize};

use super::colony::{Colony, Solution};
use super::generator::Instance;
use super::history::ConvergenceHistory;
use super::params::Params;
use crate::error::Result;

/// Everything worth keeping after a run, ready to be written as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Parameters of the run.
    pub params: Params,
    /// Instance the colony ran on, ground truth included.
    pub instance: Instance,
    /// Number of distinct fragments handed to the ants.
    pub spectrum_size: usize,
    /// Number of injected phantom fragments.
    pub phantom_count: usize,
    /// Best reconstruction.
    pub best: Solution,
    /// Best distance relative to the sequence length, in percent.
    pub error_percent: f64,
    /// Phantom fragments visited by the best route.
    pub phantoms_in_best: usize,
    /// Per-round diagnostics.
    pub history: ConvergenceHistory,
    /// RFC 3339 timestamp of report creation.
    pub finished_at: String,
}

impl RunReport {
    /// Collects the report for `best` from a colony that has finished running.
    pub fn new(colony: &Colony, best: &Solution) -> Self {
        let instance = colony.instance();
        Self {
            params: colony.params().clone(),
            instance: instance.clone(),
            spectrum_size: instance.spectrum.len(),
            phantom_count: instance.phantoms.len(),
            best: best.clone(),
            error_percent: best.error_percent(),
            phantoms_in_best: instance.phantoms_in(&best.route),
            history: colony.history().clone(),
            finished_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Saves the report to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a report from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let report = serde_json::from_str(&json)?;
        Ok(report)
    }
}
