//! # Evaluation Harness
//!
//! The `Evaluator` struct wraps a problem, counts the evaluations it
//! performs, and optionally enforces an evaluation budget. It is the piece
//! that fills objective values into [`Solution`] records; the problems
//! themselves only return bare values.
//!
//! ## Example
//!
//! ```rust
//! use multipeak::classic::OneMax;
//! use multipeak::harness::Evaluator;
//!
//! let mut evaluator = Evaluator::with_budget(OneMax::new(4).unwrap(), 100);
//!
//! let value = evaluator.evaluate(&[1, 1, 0, 1]).unwrap();
//! assert_eq!(value, 3.0);
//! assert_eq!(evaluator.consumed_evaluations(), 1);
//! assert_eq!(evaluator.remaining_evaluations(), Some(99));
//! ```

use tracing::trace;

use crate::error::{BenchmarkError, Result};
use crate::objective::Objective;
use crate::solution::Solution;

/// Wraps an objective with evaluation accounting.
///
/// Only successful evaluations are counted: a call that fails a
/// precondition consumes no budget.
#[derive(Debug, Clone)]
pub struct Evaluator<O>
where
    O: Objective,
{
    objective: O,
    consumed_evaluations: usize,
    max_evaluations: Option<usize>,
}

impl<O> Evaluator<O>
where
    O: Objective,
{
    /// Creates a new evaluator without an evaluation budget.
    pub fn new(objective: O) -> Self {
        Self {
            objective,
            consumed_evaluations: 0,
            max_evaluations: None,
        }
    }

    /// Creates a new evaluator allowing at most `max_evaluations`
    /// successful evaluations.
    pub fn with_budget(objective: O, max_evaluations: usize) -> Self {
        Self {
            objective,
            consumed_evaluations: 0,
            max_evaluations: Some(max_evaluations),
        }
    }

    /// Returns a reference to the wrapped objective.
    pub fn inner(&self) -> &O {
        &self.objective
    }

    /// Returns the number of successful evaluations performed so far.
    pub fn consumed_evaluations(&self) -> usize {
        self.consumed_evaluations
    }

    /// Returns the number of evaluations left in the budget, or `None` if
    /// no budget was set.
    pub fn remaining_evaluations(&self) -> Option<usize> {
        self.max_evaluations
            .map(|max| max.saturating_sub(self.consumed_evaluations))
    }

    /// Evaluates the given phenome, consuming one unit of budget.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::BudgetExhausted` once the budget is spent;
    /// precondition violations from the wrapped objective pass through
    /// without consuming budget.
    pub fn evaluate(&mut self, phenome: &[u8]) -> Result<f64> {
        if let Some(max) = self.max_evaluations {
            if self.consumed_evaluations >= max {
                return Err(BenchmarkError::BudgetExhausted {
                    consumed: self.consumed_evaluations,
                });
            }
        }
        let value = self.objective.objective_value(phenome)?;
        self.consumed_evaluations += 1;
        trace!(
            consumed = self.consumed_evaluations,
            value,
            "evaluated phenome"
        );
        Ok(value)
    }

    /// Evaluates a solution in place, filling in its objective values.
    pub fn evaluate_solution(&mut self, solution: &mut Solution) -> Result<()> {
        let value = self.evaluate(&solution.phenome)?;
        solution.objective_values = vec![value];
        Ok(())
    }
}
