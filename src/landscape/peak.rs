//! # Peak
//!
//! The `Peak` struct represents one attraction point in binary search
//! space: a position together with two shape parameters. A peak's height at
//! a candidate falls off linearly with the Hamming distance from the
//! candidate to the peak's position.

use crate::bitstring::{ensure_binary, hamming_distance};
use crate::error::{BenchmarkError, Result};

/// One attraction point of a multimodal binary landscape.
///
/// A peak is immutable after construction: the position and shape
/// parameters are fixed, and evaluation is read-only. Peaks are owned
/// exclusively by the problem holding them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    position: Vec<u8>,
    slope: f64,
    offset: f64,
}

impl Peak {
    /// Creates a new peak at the given position.
    ///
    /// # Arguments
    ///
    /// * `position` - The point in search space attaining this peak's maximum.
    /// * `slope` - Scales the height contribution per matching bit.
    /// * `offset` - Additive constant of the height function.
    ///
    /// # Errors
    ///
    /// Returns an error if the position contains a non-binary value, or if
    /// `slope` or `offset` is NaN or infinite.
    pub fn new(position: Vec<u8>, slope: f64, offset: f64) -> Result<Self> {
        ensure_binary(&position)?;
        if !slope.is_finite() {
            return Err(BenchmarkError::InvalidNumericValue(format!(
                "peak slope must be finite, got {}",
                slope
            )));
        }
        if !offset.is_finite() {
            return Err(BenchmarkError::InvalidNumericValue(format!(
                "peak offset must be finite, got {}",
                offset
            )));
        }
        Ok(Self {
            position,
            slope,
            offset,
        })
    }

    /// Returns the position attaining this peak's maximum.
    pub fn position(&self) -> &[u8] {
        &self.position
    }

    /// Returns the slope parameter.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the offset parameter.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the length of this peak's position.
    pub fn num_variables(&self) -> usize {
        self.position.len()
    }

    /// Evaluates this peak's height at the given phenome.
    ///
    /// With `d` the Hamming distance from the phenome to the peak's
    /// position and `n` the number of variables, the height is
    /// `slope * (n - d) + offset`. The maximum is attained at the peak's
    /// own position when the slope is positive.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::DimensionMismatch` if the phenome's length
    /// differs from the position's length.
    pub fn height(&self, phenome: &[u8]) -> Result<f64> {
        let distance = hamming_distance(phenome, &self.position)?;
        Ok(self.slope * (self.position.len() - distance) as f64 + self.offset)
    }
}
