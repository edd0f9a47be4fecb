//! # Error Types
//!
//! This module defines custom error types for the benchmark landscape library.
//! It provides specific error variants for the failure scenarios that may occur
//! when constructing or evaluating a problem.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use multipeak::error::{BenchmarkError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Matching on a specific variant:
//!
//! ```rust
//! use multipeak::error::BenchmarkError;
//! use multipeak::landscape::Peak;
//!
//! let peak = Peak::new(vec![0, 1], 1.0, 0.0).unwrap();
//! match peak.height(&[0, 1, 1]) {
//!     Err(BenchmarkError::DimensionMismatch { expected, actual }) => {
//!         assert_eq!((expected, actual), (2, 3));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the benchmark landscape library.
///
/// This enum provides specific error variants for the failure scenarios
/// that may occur when constructing or evaluating a problem. Every failure
/// is local to a single call; the problem instance is never left in a
/// partially evaluated state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    /// Error that occurs when a phenome's length does not match the
    /// problem's number of decision variables.
    #[error("Dimension mismatch: expected {expected} variables, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Error that occurs when a phenome contains a value other than 0 or 1.
    #[error("Non-binary phene at position {index}: {value}")]
    NonBinaryPhene { index: usize, value: u8 },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a landscape with no peaks is asked for an
    /// objective value or an active peak.
    #[error("Empty landscape error: Cannot evaluate a landscape with no peaks")]
    EmptyLandscape,

    /// Error that occurs when an operation is not defined for the
    /// landscape variant it was called on.
    #[error("Unsupported operation for this landscape variant: {0}")]
    Unsupported(String),

    /// Error that occurs when the basin iteration cycles instead of
    /// reaching a fixed point.
    #[error("Basin iteration did not converge within {iterations} steps")]
    NonConvergence { iterations: usize },

    /// Error that occurs when an evaluation budget is exhausted.
    #[error("Evaluation budget exhausted after {consumed} evaluations")]
    BudgetExhausted { consumed: usize },

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for benchmark landscape operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `BenchmarkError`.
///
/// ## Examples
///
/// ```rust
/// use multipeak::error::{BenchmarkError, Result};
///
/// fn may_fail() -> Result<f64> {
///     // Some operation that might fail
///     Ok(42.0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, BenchmarkError>;
