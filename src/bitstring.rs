//! # Bitstring Utilities
//!
//! Shared helpers for working with binary phenomes: Hamming distance,
//! binary validation, and single-bit neighborhood generation.
//!
//! A phenome is an ordered sequence of phenes, each 0 or 1, represented as
//! `&[u8]`. Keeping the representation open (rather than `bool`) preserves
//! the distinction between a malformed phenome and a dimension mismatch,
//! and both are reported as errors before any evaluation takes place.

use crate::error::{BenchmarkError, Result};

/// Computes the Hamming distance between a phenome and a reference
/// bitstring: the number of positions at which they differ.
///
/// Defined only for sequences of equal length.
///
/// # Errors
///
/// Returns `BenchmarkError::DimensionMismatch` if the lengths differ, with
/// `expected` taken from the reference.
///
/// # Examples
///
/// ```rust
/// use multipeak::bitstring::hamming_distance;
///
/// assert_eq!(hamming_distance(&[1, 0, 1], &[1, 1, 1]).unwrap(), 1);
/// assert_eq!(hamming_distance(&[0, 0], &[1, 1]).unwrap(), 2);
/// ```
pub fn hamming_distance(phenome: &[u8], reference: &[u8]) -> Result<usize> {
    if phenome.len() != reference.len() {
        return Err(BenchmarkError::DimensionMismatch {
            expected: reference.len(),
            actual: phenome.len(),
        });
    }
    Ok(phenome
        .iter()
        .zip(reference.iter())
        .filter(|(a, b)| a != b)
        .count())
}

/// Checks that every phene in the given phenome is 0 or 1.
///
/// # Errors
///
/// Returns `BenchmarkError::NonBinaryPhene` naming the first offending
/// position and value.
pub fn ensure_binary(phenome: &[u8]) -> Result<()> {
    for (index, &value) in phenome.iter().enumerate() {
        if value > 1 {
            return Err(BenchmarkError::NonBinaryPhene { index, value });
        }
    }
    Ok(())
}

/// Returns a copy of `phenome` with the bit at `index` flipped.
///
/// Callers must pass an in-bounds index.
pub fn flipped(phenome: &[u8], index: usize) -> Vec<u8> {
    let mut neighbor = phenome.to_vec();
    neighbor[index] = 1 - neighbor[index];
    neighbor
}
