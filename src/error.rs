//! Error type shared by every fallible operation in the crate.
//!
//! Only configuration problems, construction bugs and file I/O are errors.
//! Degenerate optimization states (no valid candidate within the retry bound,
//! a zero normalization denominator) are handled in place by the colony.

use thiserror::Error;

/// Errors raised by instance generation, assembly and configuration handling.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration parameter is outside its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the accepted range.
        reason: String,
    },
    /// The fragment size exceeds the sequence length.
    #[error("oligo size {oligo_size} exceeds sequence length {sequence_length}")]
    OligoLongerThanSequence {
        /// Configured fragment size.
        oligo_size: usize,
        /// Configured sequence length.
        sequence_length: usize,
    },
    /// Two fragments of different lengths were compared.
    #[error("cannot overlap fragments of different lengths ({left} vs {right})")]
    LengthMismatch {
        /// Length of the left-hand fragment.
        left: usize,
        /// Length of the right-hand fragment.
        right: usize,
    },
    /// A route with no fragments was handed to the assembler.
    #[error("cannot assemble an empty route")]
    EmptyRoute,
    /// The instance's starter fragment is missing from its spectrum.
    #[error("starter fragment `{0}` is not part of the spectrum")]
    StarterNotInSpectrum(String),
    /// An instance does not match the parameters it is run with.
    #[error("instance does not match parameters: {0}")]
    InstanceMismatch(String),
    /// A solution was requested before any round completed.
    #[error("no solution yet: no round has completed")]
    NoSolution,
    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A JSON document could not be encoded or decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
