pub mod bitstring;
pub mod cache;
pub mod classic;
pub mod error;
pub mod harness;
pub mod landscape;
pub mod objective;
pub mod rng;
pub mod solution;

// Re-export commonly used types for convenience
pub use error::{BenchmarkError, Result};
pub use landscape::{
    AllPeaksProblem, Landscape, NearestPeakProblem, Peak, PeakConfig, PeakSet,
    WeightedNearestPeakProblem,
};
pub use objective::Objective;
pub use solution::Solution;
