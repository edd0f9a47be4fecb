//! # Objective Trait
//!
//! The `Objective` trait is the seam between a benchmark problem and the
//! code evaluating it: a problem maps a binary phenome to a single
//! objective value. All problems in this library are maximization problems.
//!
//! ## Example
//!
//! ```rust
//! use multipeak::error::Result;
//! use multipeak::objective::Objective;
//!
//! #[derive(Debug)]
//! struct CountOnes {
//!     num_variables: usize,
//! }
//!
//! impl Objective for CountOnes {
//!     fn num_variables(&self) -> usize {
//!         self.num_variables
//!     }
//!
//!     fn objective_value(&self, phenome: &[u8]) -> Result<f64> {
//!         Ok(phenome.iter().map(|&bit| f64::from(bit)).sum())
//!     }
//! }
//! ```

use rayon::prelude::*;

use crate::error::Result;

/// Minimum number of phenomes for batch evaluation to go parallel.
const PARALLEL_THRESHOLD: usize = 1000;

/// Trait for single-objective binary benchmark problems.
///
/// Implementations are evaluated read-only: calling `objective_value` never
/// mutates the problem, so a problem instance can be shared freely across
/// threads.
pub trait Objective: Send + Sync {
    /// Returns the search space dimension of this problem.
    fn num_variables(&self) -> usize;

    /// Evaluates the given phenome and returns its objective value.
    ///
    /// # Errors
    ///
    /// Fails on precondition violations (dimension mismatch, non-binary
    /// phenes) without performing any partial evaluation.
    fn objective_value(&self, phenome: &[u8]) -> Result<f64>;

    /// Returns `true` if repeated evaluation of the same phenome always
    /// yields the same value.
    ///
    /// Every problem in this library is deterministic once constructed,
    /// even when its peaks were generated randomly.
    fn is_deterministic(&self) -> bool {
        true
    }
}

/// Evaluates a batch of phenomes against a single problem.
///
/// Evaluation is read-only, so large batches are fanned out with rayon;
/// small batches are evaluated sequentially where parallelism would not
/// pay for itself. Results preserve input order. The first failing phenome
/// aborts the batch.
///
/// # Examples
///
/// ```rust
/// use multipeak::landscape::{NearestPeakProblem, Peak};
/// use multipeak::objective::evaluate_batch;
///
/// let problem = NearestPeakProblem::new(
///     2,
///     vec![Peak::new(vec![1, 1], 1.0, 0.0).unwrap()],
/// )
/// .unwrap();
///
/// let phenomes = vec![vec![1, 1], vec![0, 0]];
/// let values = evaluate_batch(&problem, &phenomes).unwrap();
/// assert_eq!(values, vec![2.0, 0.0]);
/// ```
pub fn evaluate_batch<O>(objective: &O, phenomes: &[Vec<u8>]) -> Result<Vec<f64>>
where
    O: Objective + ?Sized,
{
    if phenomes.len() >= PARALLEL_THRESHOLD {
        phenomes
            .par_iter()
            .map(|phenome| objective.objective_value(phenome))
            .collect()
    } else {
        phenomes
            .iter()
            .map(|phenome| objective.objective_value(phenome))
            .collect()
    }
}
