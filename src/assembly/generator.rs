//! Synthetic sequencing-by-hybridization instances.
//!
//! A random ground-truth sequence is cut into every k-length window. Each
//! window records a position range around its offset, widened by positional
//! noise. Optional phantom fragments simulate false-positive hybridization
//! signals. The distinct fragments are shuffled into the spectrum handed to
//! the colony.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::params::Params;
use crate::error::{Error, Result};

/// Nucleotide alphabet of generated sequences.
pub const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Fraction of the sequence length injected as phantom fragments.
pub const PHANTOM_RATIO: f64 = 0.1;

/// One window in which an occurrence of a fragment may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Lowest admissible start position.
    pub lower: usize,
    /// Highest admissible start position.
    pub upper: usize,
}

impl Interval {
    /// Creates an interval spanning `lower..=upper`.
    pub fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if `position` lies inside the interval.
    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.lower <= position && position <= self.upper
    }
}

/// Position intervals of every fragment, one interval per occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRanges {
    entries: BTreeMap<String, Vec<Interval>>,
}

impl PositionRanges {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more occurrence of `fragment`.
    pub fn push(&mut self, fragment: &str, interval: Interval) {
        self.entries
            .entry(fragment.to_string())
            .or_default()
            .push(interval);
    }

    /// Intervals recorded for `fragment`.
    pub fn get(&self, fragment: &str) -> &[Interval] {
        match self.entries.get(fragment) {
            Some(intervals) => intervals,
            None => &[],
        }
    }

    /// Number of distinct fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fragment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates fragments in lexicographic order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Lays the intervals out in the order of `spectrum`.
    pub fn aligned_to(&self, spectrum: &[String]) -> Vec<Vec<Interval>> {
        spectrum
            .iter()
            .map(|fragment| self.get(fragment).to_vec())
            .collect()
    }
}

/// A generated problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Ground-truth sequence.
    pub sequence: String,
    /// Fragment length.
    pub oligo_size: usize,
    /// Distinct fragments in shuffled order.
    pub spectrum: Vec<String>,
    /// Position intervals per fragment.
    pub ranges: PositionRanges,
    /// Fragment found at offset 0 of the sequence.
    pub starter: String,
    /// Injected fragments that never occur in the sequence.
    pub phantoms: BTreeSet<String>,
}

impl Instance {
    /// Generates an instance from the sizes and noise settings in `params`.
    ///
    /// # Arguments
    ///
    /// * `params` - Supplies `sequence_length`, `oligo_size`, `percent` and `inject_phantoms`
    /// * `rng` - Random source for the sequence, the noise and the shuffle
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the fragment size is zero or
    /// exceeds the sequence length.
    pub fn generate<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Result<Self> {
        let n = params.sequence_length;
        let k = params.oligo_size;
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "oligo_size",
                reason: "must be a positive integer".to_string(),
            });
        }
        if k > n {
            return Err(Error::OligoLongerThanSequence {
                oligo_size: k,
                sequence_length: n,
            });
        }

        let sequence = random_sequence(n, rng);
        let spread = (params.percent * n as f64).floor() as usize;

        let mut ranges = PositionRanges::new();
        for offset in 0..=n - k {
            let interval = widen(offset, spread, n, rng);
            ranges.push(&sequence[offset..offset + k], interval);
        }
        let starter = sequence[..k].to_string();

        let mut phantoms = BTreeSet::new();
        if params.inject_phantoms {
            let count = (PHANTOM_RATIO * n as f64).floor() as usize;
            for _ in 0..count {
                let fragment = random_sequence(k, rng);
                let anchor = rng.random_range(0..=n);
                if ranges.get(&fragment).is_empty() {
                    phantoms.insert(fragment.clone());
                }
                ranges.push(&fragment, widen(anchor, spread, n, rng));
            }
        }

        let mut spectrum: Vec<String> = ranges.fragments().map(str::to_string).collect();
        spectrum.shuffle(rng);

        Ok(Self {
            sequence,
            oligo_size: k,
            spectrum,
            ranges,
            starter,
            phantoms,
        })
    }

    /// Returns `true` if `fragment` was injected and never occurs in the sequence.
    pub fn is_phantom(&self, fragment: &str) -> bool {
        self.phantoms.contains(fragment)
    }

    /// Counts phantom fragments visited by `route`.
    pub fn phantoms_in<S: AsRef<str>>(&self, route: &[S]) -> usize {
        route
            .iter()
            .filter(|fragment| self.is_phantom(fragment.as_ref()))
            .count()
    }
}

/// Draws `len` independent uniform nucleotides.
pub fn random_sequence<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

/// Widens each side of `position` by an independent draw in `0..=spread`,
/// clamped to `[0, n]`.
fn widen<R: Rng + ?Sized>(position: usize, spread: usize, n: usize, rng: &mut R) -> Interval {
    let below = rng.random_range(0..=spread);
    let above = rng.random_range(0..=spread);
    Interval::new(
        position.saturating_sub(below),
        (position + above).min(n),
    )
}
