//! # AllPeaksProblem
//!
//! A multimodal binary test problem where the landscape is generated by
//! aggregating all peak functions. The local optima of this problem are
//! unknown, and global optima are only known in the special case of
//! identical slopes for all peaks, so the optimum and basin queries are not
//! supported for this variant.

use tracing::debug;

use crate::error::{BenchmarkError, Result};
use crate::landscape::{Landscape, Peak, PeakConfig, PeakSet};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;
use crate::solution::Solution;

/// A multimodal binary problem summing all peak function values.
#[derive(Debug, Clone)]
pub struct AllPeaksProblem {
    peaks: PeakSet,
}

impl AllPeaksProblem {
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
            "generated all-peaks landscape"
        );
        Ok(Self { peaks })
    }

    fn unsupported(operation: &str) -> BenchmarkError {
        BenchmarkError::Unsupported(format!(
            "{} is not defined for the all-peaks aggregation",
            operation
        ))
    }
}

impl Objective for AllPeaksProblem {
    fn num_variables(&self) -> usize {
        self.peaks.num_variables()
    }

    /// Aggregates the function values of all peak functions.
    ///
    /// An empty peak set sums to 0.0.
    fn objective_value(&self, phenome: &[u8]) -> Result<f64> {
        self.peaks.check_phenome(phenome)?;
        let mut sum = 0.0;
        for peak in self.peaks.peaks() {
            sum += peak.height(phenome)?;
        }
        Ok(sum)
    }
}

impl Landscape for AllPeaksProblem {
    fn peak_set(&self) -> &PeakSet {
        &self.peaks
    }

    fn active_peak(&self, _phenome: &[u8]) -> Result<&Peak> {
        Err(Self::unsupported("active peak"))
    }

    fn basin(&self, _phenome: &[u8]) -> Result<&Peak> {
        Err(Self::unsupported("basin membership"))
    }

    fn local_optima(&self, _limit: Option<usize>) -> Result<Vec<Solution>> {
        Err(Self::unsupported("local optimum enumeration"))
    }

    fn global_optima(&self, _limit: Option<usize>) -> Result<Vec<Solution>> {
        Err(Self::unsupported("global optimum enumeration"))
    }
}
