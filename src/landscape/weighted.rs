//! # WeightedNearestPeakProblem
//!
//! A multimodal binary test problem where the peak with the highest
//! function value at a candidate determines the objective value. Unlike the
//! nearest-peak variant, every peak competes at every candidate, not only
//! the closest ones.

use tracing::{debug, trace, warn};

use crate::error::{BenchmarkError, Result};
use crate::landscape::{Landscape, Peak, PeakConfig, PeakSet};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;

/// A multimodal binary problem taking the maximum over all peak functions.
#[derive(Debug, Clone)]
pub struct WeightedNearestPeakProblem {
    peaks: PeakSet,
}

impl WeightedNearestPeakProblem {
    /// Creates a new problem from previously prepared peaks.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_variables` is zero or any peak's position
    /// length differs from it.
    pub fn new(num_variables: usize, peaks: Vec<Peak>) -> Result<Self> {
        Ok(Self {
            peaks: PeakSet::new(num_variables, peaks)?,
        })
    }

    /// Creates a new problem with randomly generated peaks.
    pub fn random(
        num_variables: usize,
        config: &PeakConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let peaks = PeakSet::random(num_variables, config, rng)?;
        debug!(
            num_variables,
            num_peaks = peaks.len(),
            "generated weighted-nearest-peak landscape"
        );
        Ok(Self { peaks })
    }
}

impl Objective for WeightedNearestPeakProblem {
    fn num_variables(&self) -> usize {
        self.peaks.num_variables()
    }

    /// Returns the maximal peak function value at `phenome`.
    fn objective_value(&self, phenome: &[u8]) -> Result<f64> {
        let active_peak = self.active_peak(phenome)?;
        active_peak.height(phenome)
    }
}

impl Landscape for WeightedNearestPeakProblem {
    fn peak_set(&self) -> &PeakSet {
        &self.peaks
    }

    /// Returns the peak modeling the function at `phenome`: the one with
    /// the highest function value there, the first in peak order on ties.
    fn active_peak(&self, phenome: &[u8]) -> Result<&Peak> {
        self.peaks.check_phenome(phenome)?;
        let mut peaks = self.peaks.peaks().iter();
        let mut active_peak = peaks.next().ok_or(BenchmarkError::EmptyLandscape)?;
        let mut max_value = active_peak.height(phenome)?;
        for peak in peaks {
            let value = peak.height(phenome)?;
            if value > max_value {
                max_value = value;
                active_peak = peak;
            }
        }
        Ok(active_peak)
    }

    /// Returns the peak in whose attraction basin `phenome` is located.
    ///
    /// The basin is found by fixed-point iteration: jump to the active
    /// peak's position until the active peak there has that same position.
    /// Because basins of overlapping peaks can be discontinuous, this is an
    /// approximation: the returned peak may not be the one an ideal
    /// steepest-ascent algorithm would converge to.
    ///
    /// # Errors
    ///
    /// After the first jump the current point is always one of the (at
    /// most `len`) distinct peak positions, so a chain longer than
    /// `len + 1` steps has revisited a position and cycles. Such
    /// configurations (possible when slopes are negative) are reported as
    /// `BenchmarkError::NonConvergence` instead of looping.
    fn basin(&self, phenome: &[u8]) -> Result<&Peak> {
        let max_iterations = self.peaks.len() + 1;
        let mut previous = phenome.to_vec();
        let mut current = self.active_peak(&previous)?;
        let mut iterations = 0;
        while current.position() != previous.as_slice() {
            if iterations >= max_iterations {
                warn!(iterations, "basin iteration cycled");
                return Err(BenchmarkError::NonConvergence { iterations });
            }
            previous = current.position().to_vec();
            current = self.active_peak(&previous)?;
            iterations += 1;
        }
        trace!(iterations, "basin iteration converged");
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landscape::Landscape;

    #[test]
    fn test_objective_takes_global_maximum() {
        // The far peak dominates everywhere through its slope.
        let problem = WeightedNearestPeakProblem::new(
            3,
            vec![
                Peak::new(vec![0, 0, 0], 1.0, 0.0).unwrap(),
                Peak::new(vec![1, 1, 1], 3.0, 0.0).unwrap(),
            ],
        )
        .unwrap();

        // At [1, 0, 0]: heights are 2.0 and 3.0 * 1 = 3.0.
        assert_eq!(problem.objective_value(&[1, 0, 0]).unwrap(), 3.0);
        let active = problem.active_peak(&[1, 0, 0]).unwrap();
        assert_eq!(active.position(), &[1, 1, 1]);
    }

    #[test]
    fn test_active_peak_tie_takes_first() {
        let problem = WeightedNearestPeakProblem::new(
            2,
            vec![
                Peak::new(vec![1, 1], 1.0, 0.0).unwrap(),
                Peak::new(vec![0, 0], 1.0, 0.0).unwrap(),
            ],
        )
        .unwrap();

        // Both peaks reach height 1 at [1, 0].
        let active = problem.active_peak(&[1, 0]).unwrap();
        assert_eq!(active.position(), &[1, 1]);
    }

    #[test]
    fn test_basin_fixed_point_moves_through_peaks() {
        // From [0, 0, 0, 0] the active peak is the near one, but at the
        // near peak's position the steep far peak dominates, so the basin
        // iteration moves on and settles there.
        let near = Peak::new(vec![1, 1, 0, 0], 1.0, 0.0).unwrap();
        let far = Peak::new(vec![1, 1, 1, 1], 3.0, 0.0).unwrap();
        let problem = WeightedNearestPeakProblem::new(4, vec![near, far]).unwrap();

        let start = [0, 0, 0, 0];
        assert_eq!(problem.active_peak(&start).unwrap().position(), &[1, 1, 0, 0]);

        let basin = problem.basin(&start).unwrap();
        assert_eq!(basin.position(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_basin_at_dominant_peak_is_immediate() {
        let problem = WeightedNearestPeakProblem::new(
            3,
            vec![
                Peak::new(vec![0, 0, 0], 1.0, 0.0).unwrap(),
                Peak::new(vec![1, 1, 1], 2.0, 0.0).unwrap(),
            ],
        )
        .unwrap();

        // [0, 0, 0] is the first peak's own position and it dominates there.
        let basin = problem.basin(&[0, 0, 0]).unwrap();
        assert_eq!(basin.position(), &[0, 0, 0]);
    }

    #[test]
    fn test_basin_reports_non_convergence_on_cycle() {
        // Two mutually dominating peaks: with negative slopes each peak's
        // function value is higher at the other's position, so the
        // iteration alternates between them forever.
        let problem = WeightedNearestPeakProblem::new(
            1,
            vec![
                Peak::new(vec![0], -1.0, 0.0).unwrap(),
                Peak::new(vec![1], -1.0, -0.5).unwrap(),
            ],
        )
        .unwrap();

        // active([0]) is the second peak (-0.5 > -1.0), active([1]) is the
        // first peak (0.0 > -1.5).
        assert_eq!(problem.active_peak(&[0]).unwrap().position(), &[1]);
        assert_eq!(problem.active_peak(&[1]).unwrap().position(), &[0]);

        assert!(matches!(
            problem.basin(&[0]),
            Err(BenchmarkError::NonConvergence { .. })
        ));
    }

    #[test]
    fn test_empty_landscape_fails() {
        let problem = WeightedNearestPeakProblem::new(2, vec![]).unwrap();
        assert_eq!(
            problem.objective_value(&[0, 1]),
            Err(BenchmarkError::EmptyLandscape)
        );
        assert_eq!(problem.basin(&[0, 1]), Err(BenchmarkError::EmptyLandscape));
    }

    #[test]
    fn test_precondition_violations() {
        let problem = WeightedNearestPeakProblem::new(
            2,
            vec![Peak::new(vec![1, 1], 1.0, 0.0).unwrap()],
        )
        .unwrap();

        assert_eq!(
            problem.objective_value(&[1]),
            Err(BenchmarkError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            problem.basin(&[1, 7]),
            Err(BenchmarkError::NonBinaryPhene { index: 1, value: 7 })
        );
    }
}
