//! # NearestPeakProblem
//!
//! A binary test problem with a controllable number of local optima: the
//! peak closest to a candidate (by Hamming distance) is responsible for its
//! objective value.

use tracing::debug;

use crate::error::{BenchmarkError, Result};
use crate::landscape::{Landscape, Peak, PeakConfig, PeakSet};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;

/// A multimodal binary problem where the nearest peak models the function.
///
/// Only peaks tied for minimum Hamming distance compete at a candidate;
/// among those, the one with the highest function value wins, the first in
/// peak order on ties.
#[derive(Debug, Clone)]
pub struct NearestPeakProblem {
    peaks: PeakSet,
}

impl NearestPeakProblem {
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
            "generated nearest-peak landscape"
        );
        Ok(Self { peaks })
    }
}

impl Objective for NearestPeakProblem {
    fn num_variables(&self) -> usize {
        self.peaks.num_variables()
    }

    /// Returns the function value of the nearest peak.
    fn objective_value(&self, phenome: &[u8]) -> Result<f64> {
        let active_peak = self.active_peak(phenome)?;
        active_peak.height(phenome)
    }
}

impl Landscape for NearestPeakProblem {
    fn peak_set(&self) -> &PeakSet {
        &self.peaks
    }

    /// Returns the peak modeling the function at `phenome`.
    ///
    /// Among the peaks at minimum Hamming distance, the one with the
    /// highest function value is active; ties go to the first in peak
    /// order.
    fn active_peak(&self, phenome: &[u8]) -> Result<&Peak> {
        let closest_peaks = self.peaks.closest_peaks(phenome)?;
        let mut candidates = closest_peaks.into_iter();
        let mut active_peak = candidates.next().ok_or(BenchmarkError::EmptyLandscape)?;
        let mut max_value = active_peak.height(phenome)?;
        for peak in candidates {
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
    /// For this variant the basin is a single deterministic lookup: the
    /// active peak already is the basin's attractor.
    fn basin(&self, phenome: &[u8]) -> Result<&Peak> {
        self.active_peak(phenome)
    }
}
