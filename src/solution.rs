//! # Solution
//!
//! The `Solution` struct represents a candidate solution: an owned phenome
//! together with the objective values assigned to it. Optimum enumeration
//! returns solutions with bare phenomes; objective values are filled in
//! separately by the evaluation harness.

/// A candidate solution in binary search space.
///
/// The phenome is owned by the solution; the objective values start out
/// empty and are populated by an [`Evaluator`](crate::harness::Evaluator)
/// once the solution has been evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The point in search space this solution represents.
    pub phenome: Vec<u8>,
    /// The objective values assigned by evaluation; empty until evaluated.
    pub objective_values: Vec<f64>,
}

impl Solution {
    /// Creates a new, unevaluated solution from the given phenome.
    pub fn new(phenome: Vec<u8>) -> Self {
        Self {
            phenome,
            objective_values: Vec::new(),
        }
    }

    /// Returns `true` if objective values have been assigned.
    pub fn is_evaluated(&self) -> bool {
        !self.objective_values.is_empty()
    }
}
