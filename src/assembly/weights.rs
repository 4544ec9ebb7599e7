//! Pairwise overlap costs and the fragment-to-index translation table.

use std::collections::HashMap;

use ndarray::Array2;

use super::overlap::overlap;
use crate::error::Result;

/// Read-only structures derived once per instance.
///
/// Row and column `i` of the weight matrix belong to `spectrum[i]`; the
/// pheromone field uses the same indexing.
#[derive(Debug, Clone)]
pub struct WeightIndex {
    weights: Array2<usize>,
    translation: HashMap<String, usize>,
    fragments: Vec<String>,
}

impl WeightIndex {
    /// Builds the full overlap-cost matrix over `spectrum`, self-pairs included.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LengthMismatch`] if the spectrum mixes fragment lengths.
    pub fn build(spectrum: &[String]) -> Result<Self> {
        let size = spectrum.len();
        let mut weights = Array2::zeros((size, size));
        for (i, from) in spectrum.iter().enumerate() {
            for (j, to) in spectrum.iter().enumerate() {
                weights[[i, j]] = overlap(from, to)?;
            }
        }

        let translation = spectrum
            .iter()
            .enumerate()
            .map(|(i, fragment)| (fragment.clone(), i))
            .collect();

        Ok(Self {
            weights,
            translation,
            fragments: spectrum.to_vec(),
        })
    }

    /// Overlap cost of moving from fragment `from` to fragment `to`.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> usize {
        self.weights[[from, to]]
    }

    /// Index of `fragment`, if it belongs to the spectrum.
    pub fn index_of(&self, fragment: &str) -> Option<usize> {
        self.translation.get(fragment).copied()
    }

    /// Fragment stored at `index`.
    pub fn fragment(&self, index: usize) -> &str {
        &self.fragments[index]
    }

    /// Number of fragments indexed.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` for an empty spectrum.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The full weight matrix.
    pub fn matrix(&self) -> &Array2<usize> {
        &self.weights
    }
}
