//! # Antseq - Ant Colony Sequence Reconstruction
//!
//! Rebuilds a DNA sequence from a noisy, shuffled spectrum of overlapping
//! fragments (sequencing by hybridization) with an ant colony metaheuristic.
//!
//! ## Features
//!
//! - Synthetic instances with positional noise and phantom fragments
//! - Directed suffix/prefix overlap costs between fragments
//! - Agents that honor per-fragment position windows and follow pheromone
//! - Rounds of agents run in parallel with rayon from a shared snapshot
//! - Pheromone normalization, evaporation and clamping between rounds
//! - Seedable randomness for deterministic replay
//! - JSON configuration and run reports
//!
//! ## Core Modules
//!
//! - [`assembly::generator`] - Instance generation
//! - [`assembly::ant`] - Agent traversal state machine
//! - [`assembly::colony`] - Round orchestration and best-solution tracking
//! - [`assembly::assembler`] - Route to sequence merging
//!
//! ## Example
//!
//! ```rust,no_run
//! use antseq::assembly::colony::Colony;
//! use antseq::assembly::params::Params;
//!
//! let params = Params {
//!     sequence_length: 60,
//!     oligo_size: 5,
//!     iterations: 10,
//!     seed: Some(7),
//!     ..Params::default()
//! };
//! let mut colony = Colony::new(params)?;
//! let best = colony.run()?;
//! println!("{} (distance {})", best.sequence, best.distance);
//! # Ok::<(), antseq::Error>(())
//! ```

/// Sequence reconstruction components.
pub mod assembly {
    /// Route to sequence merging.
    pub mod assembler;
    /// Agent traversal of the fragment graph.
    pub mod ant;
    /// Colony orchestration and the best solution.
    pub mod colony;
    /// Levenshtein edit distance.
    pub mod distance;
    /// Synthetic instance generation.
    pub mod generator;
    /// Convergence diagnostics.
    pub mod history;
    /// Suffix/prefix overlap cost.
    pub mod overlap;
    /// Run parameters.
    pub mod params;
    /// Pheromone trail matrix.
    pub mod pheromone;
    /// Seedable random source.
    pub mod random;
    /// Run reports.
    pub mod report;
    /// Weight matrix and translation table.
    pub mod weights;
}

/// Crate error type.
pub mod error;

pub use error::{Error, Result};
