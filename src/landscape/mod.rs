//! # Peak Landscapes
//!
//! This module provides the multimodal "peak" landscape family: binary
//! benchmark problems whose objective is shaped by a collection of
//! attraction points. A [`PeakSet`] owns the peaks of one problem and
//! provides the services shared by all variants (validation, random
//! generation, closest-peak queries); the [`Landscape`] trait adds the
//! variant-specific behavior on top of the [`Objective`] seam.
//!
//! Three landscape variants are provided, one problem type per instance:
//!
//! - [`NearestPeakProblem`]: the closest peak determines the objective value
//! - [`WeightedNearestPeakProblem`]: the highest peak function anywhere
//!   determines the objective value
//! - [`AllPeaksProblem`]: all peak functions are summed
//!
//! ## Example
//!
//! ```rust
//! use multipeak::landscape::{Landscape, NearestPeakProblem, Peak};
//! use multipeak::objective::Objective;
//!
//! let problem = NearestPeakProblem::new(
//!     2,
//!     vec![
//!         Peak::new(vec![1, 1], 1.0, 0.0).unwrap(),
//!         Peak::new(vec![0, 0], 1.0, 0.0).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(problem.objective_value(&[1, 1]).unwrap(), 2.0);
//! assert_eq!(problem.global_optima(None).unwrap().len(), 2);
//! ```

pub mod all_peaks;
pub mod nearest;
pub mod peak;
pub mod weighted;

use crate::bitstring::{ensure_binary, flipped, hamming_distance};
use crate::error::{BenchmarkError, Result};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;
use crate::solution::Solution;

pub use all_peaks::AllPeaksProblem;
pub use nearest::NearestPeakProblem;
pub use peak::Peak;
pub use weighted::WeightedNearestPeakProblem;

/// Configuration for random peak generation.
///
/// Defaults produce two peaks with slope 1.0 and offset 0.0.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakConfig {
    num_peaks: usize,
    slope_range: (f64, f64),
    offset_range: (f64, f64),
}

impl PeakConfig {
    /// Creates a new `PeakConfig` instance with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `num_peaks` - The number of peaks to generate.
    /// * `slope_range` - Peak slopes are drawn uniformly from this inclusive range.
    /// * `offset_range` - Peak offsets are drawn uniformly from this inclusive range.
    pub fn new(num_peaks: usize, slope_range: (f64, f64), offset_range: (f64, f64)) -> Self {
        Self {
            num_peaks,
            slope_range,
            offset_range,
        }
    }

    pub fn get_num_peaks(&self) -> usize {
        self.num_peaks
    }

    pub fn get_slope_range(&self) -> (f64, f64) {
        self.slope_range
    }

    pub fn get_offset_range(&self) -> (f64, f64) {
        self.offset_range
    }

    /// Returns a builder for creating a `PeakConfig` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use multipeak::landscape::PeakConfig;
    ///
    /// let config = PeakConfig::builder()
    ///     .num_peaks(8)
    ///     .slope_range(0.5, 2.0)
    ///     .offset_range(-1.0, 1.0)
    ///     .build();
    /// ```
    pub fn builder() -> PeakConfigBuilder {
        PeakConfigBuilder::default()
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            num_peaks: 2,
            slope_range: (1.0, 1.0),
            offset_range: (0.0, 0.0),
        }
    }
}

/// Builder for `PeakConfig`.
///
/// Provides a fluent interface for constructing `PeakConfig` instances.
#[derive(Debug, Clone, Default)]
pub struct PeakConfigBuilder {
    num_peaks: Option<usize>,
    slope_range: Option<(f64, f64)>,
    offset_range: Option<(f64, f64)>,
}

impl PeakConfigBuilder {
    /// Sets the number of peaks to generate.
    pub fn num_peaks(mut self, value: usize) -> Self {
        self.num_peaks = Some(value);
        self
    }

    /// Sets the inclusive range peak slopes are drawn from.
    pub fn slope_range(mut self, from: f64, to: f64) -> Self {
        self.slope_range = Some((from, to));
        self
    }

    /// Sets the inclusive range peak offsets are drawn from.
    pub fn offset_range(mut self, from: f64, to: f64) -> Self {
        self.offset_range = Some((from, to));
        self
    }

    /// Builds the `PeakConfig` instance.
    pub fn build(self) -> PeakConfig {
        PeakConfig {
            num_peaks: self.num_peaks.unwrap_or(2),
            slope_range: self.slope_range.unwrap_or((1.0, 1.0)),
            offset_range: self.offset_range.unwrap_or((0.0, 0.0)),
        }
    }
}

fn ensure_ordered_range(name: &str, range: (f64, f64)) -> Result<()> {
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(BenchmarkError::InvalidNumericValue(format!(
            "{} bounds must be finite, got ({}, {})",
            name, range.0, range.1
        )));
    }
    if range.0 > range.1 {
        return Err(BenchmarkError::Configuration(format!(
            "{} lower bound {} exceeds upper bound {}",
            name, range.0, range.1
        )));
    }
    Ok(())
}

/// The ordered peak collection of one landscape, for a fixed dimensionality.
///
/// A `PeakSet` owns its peaks exclusively; cloning a problem clones its
/// peaks. The landscape definition is immutable after construction, so
/// evaluation is read-only and safe to run concurrently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakSet {
    num_variables: usize,
    peaks: Vec<Peak>,
}

impl PeakSet {
    /// Creates a new `PeakSet` from previously prepared peaks.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_variables` is zero or if any peak's
    /// position length differs from `num_variables`.
    pub fn new(num_variables: usize, peaks: Vec<Peak>) -> Result<Self> {
        if num_variables == 0 {
            return Err(BenchmarkError::Configuration(
                "Number of variables must be greater than 0".to_string(),
            ));
        }
        for peak in &peaks {
            if peak.num_variables() != num_variables {
                return Err(BenchmarkError::DimensionMismatch {
                    expected: num_variables,
                    actual: peak.num_variables(),
                });
            }
        }
        Ok(Self {
            num_variables,
            peaks,
        })
    }

    /// Creates a new `PeakSet` with randomly generated peaks.
    pub fn random(
        num_variables: usize,
        config: &PeakConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let peaks = Self::rand_uniform_peaks(
            config.get_num_peaks(),
            num_variables,
            config.get_slope_range(),
            config.get_offset_range(),
            rng,
        )?;
        Self::new(num_variables, peaks)
    }

    /// Creates peaks with random uniform distribution.
    ///
    /// Each peak's position is drawn one uniformly random bit at a time;
    /// its slope and offset are drawn uniformly from the given inclusive
    /// ranges.
    ///
    /// # Arguments
    ///
    /// * `num_peaks` - The number of peaks to generate.
    /// * `num_variables` - The number of decision variables of the search space.
    /// * `slope_range` - Peak slopes are drawn uniformly from this inclusive range.
    /// * `offset_range` - Peak offsets are drawn uniformly from this inclusive range.
    /// * `rng` - The random number generator to draw from.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_variables` is zero, or if either range is
    /// inverted or non-finite.
    pub fn rand_uniform_peaks(
        num_peaks: usize,
        num_variables: usize,
        slope_range: (f64, f64),
        offset_range: (f64, f64),
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Peak>> {
        if num_variables == 0 {
            return Err(BenchmarkError::Configuration(
                "Number of variables must be greater than 0".to_string(),
            ));
        }
        ensure_ordered_range("slope range", slope_range)?;
        ensure_ordered_range("offset range", offset_range)?;

        (0..num_peaks)
            .map(|_| {
                let position = rng.random_bits(num_variables);
                let slope = rng.uniform_inclusive(slope_range.0, slope_range.1);
                let offset = rng.uniform_inclusive(offset_range.0, offset_range.1);
                Peak::new(position, slope, offset)
            })
            .collect()
    }

    /// Returns the search space dimension.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Returns the peaks in their original order.
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    /// Returns the number of peaks.
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// Returns `true` if this set holds no peaks.
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Checks that the given phenome is a valid candidate for this set.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::DimensionMismatch` on a length mismatch and
    /// `BenchmarkError::NonBinaryPhene` on a value other than 0 or 1.
    pub fn check_phenome(&self, phenome: &[u8]) -> Result<()> {
        if phenome.len() != self.num_variables {
            return Err(BenchmarkError::DimensionMismatch {
                expected: self.num_variables,
                actual: phenome.len(),
            });
        }
        ensure_binary(phenome)
    }

    /// Returns all peaks closest to `phenome` in terms of Hamming distance.
    ///
    /// Every peak attaining the minimum distance is included, in original
    /// peak order. The result is empty only when the set holds no peaks.
    pub fn closest_peaks(&self, phenome: &[u8]) -> Result<Vec<&Peak>> {
        self.check_phenome(phenome)?;
        let mut closest_peaks: Vec<&Peak> = Vec::new();
        let mut min_distance = usize::MAX;
        for peak in &self.peaks {
            let distance = hamming_distance(phenome, peak.position())?;
            if distance < min_distance {
                min_distance = distance;
                closest_peaks.clear();
            }
            if distance == min_distance {
                closest_peaks.push(peak);
            }
        }
        Ok(closest_peaks)
    }
}

/// Trait for peak-based landscape variants.
///
/// Implementors supply the variant-specific behavior (objective value,
/// active peak, basin membership); locally and globally optimal solution
/// enumeration is shared across variants and provided as default methods
/// driven by the implementor's own objective function.
pub trait Landscape: Objective {
    /// Returns the peak collection defining this landscape.
    fn peak_set(&self) -> &PeakSet;

    /// Returns the peak determining the objective value at `phenome`.
    fn active_peak(&self, phenome: &[u8]) -> Result<&Peak>;

    /// Returns the peak in whose attraction basin `phenome` is located.
    fn basin(&self, phenome: &[u8]) -> Result<&Peak>;

    /// Returns locally optimal solutions (includes global ones).
    ///
    /// A peak position is locally optimal if no single-bit flip strictly
    /// increases this landscape's objective value. The result is truncated
    /// to `limit` if given; objective values are not filled in.
    fn local_optima(&self, limit: Option<usize>) -> Result<Vec<Solution>> {
        let mut local_optima = Vec::new();
        for peak in self.peak_set().peaks() {
            if let Some(limit) = limit {
                if local_optima.len() == limit {
                    break;
                }
            }
            let peak_value = self.objective_value(peak.position())?;
            let mut improvable = false;
            for index in 0..peak.num_variables() {
                let neighbor = flipped(peak.position(), index);
                if self.objective_value(&neighbor)? > peak_value {
                    improvable = true;
                    break;
                }
            }
            if !improvable {
                local_optima.push(Solution::new(peak.position().to_vec()));
            }
        }
        Ok(local_optima)
    }

    /// Returns globally optimal solutions.
    ///
    /// Only peak positions are tested: the subset attaining the maximum
    /// objective value is returned in peak order, ties included, truncated
    /// to `limit` if given. Objective values are not filled in.
    fn global_optima(&self, limit: Option<usize>) -> Result<Vec<Solution>> {
        let mut optimal_peaks: Vec<&Peak> = Vec::new();
        let mut max_value = f64::NEG_INFINITY;
        for peak in self.peak_set().peaks() {
            let peak_value = self.objective_value(peak.position())?;
            if peak_value > max_value {
                max_value = peak_value;
                optimal_peaks.clear();
            }
            if peak_value == max_value {
                optimal_peaks.push(peak);
            }
        }
        let mut optima: Vec<Solution> = optimal_peaks
            .into_iter()
            .map(|peak| Solution::new(peak.position().to_vec()))
            .collect();
        if let Some(limit) = limit {
            optima.truncate(limit);
        }
        Ok(optima)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(position: Vec<u8>, slope: f64, offset: f64) -> Peak {
        Peak::new(position, slope, offset).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_variables() {
        assert!(matches!(
            PeakSet::new(0, vec![]),
            Err(BenchmarkError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_peak() {
        let result = PeakSet::new(3, vec![peak(vec![1, 0], 1.0, 0.0)]);
        assert_eq!(
            result,
            Err(BenchmarkError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_zero_peaks_permitted() {
        let set = PeakSet::new(4, vec![]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.closest_peaks(&[0, 1, 0, 1]).unwrap().len(), 0);
    }

    #[test]
    fn test_closest_peaks_tie_inclusion() {
        let set = PeakSet::new(
            2,
            vec![peak(vec![1, 1], 1.0, 0.0), peak(vec![0, 0], 1.0, 0.0)],
        )
        .unwrap();

        // Distance 1 to both peaks: both are included, in original order.
        let closest = set.closest_peaks(&[1, 0]).unwrap();
        assert_eq!(closest.len(), 2);
        assert_eq!(closest[0].position(), &[1, 1]);
        assert_eq!(closest[1].position(), &[0, 0]);

        // Distance 0 to the first peak only.
        let closest = set.closest_peaks(&[1, 1]).unwrap();
        assert_eq!(closest.len(), 1);
        assert_eq!(closest[0].position(), &[1, 1]);
    }

    #[test]
    fn test_closest_peaks_all_at_minimum_distance() {
        let set = PeakSet::new(
            3,
            vec![
                peak(vec![0, 0, 0], 1.0, 0.0),
                peak(vec![1, 1, 1], 1.0, 0.0),
                peak(vec![0, 1, 0], 1.0, 0.0),
            ],
        )
        .unwrap();

        let phenome = [0, 0, 1];
        let closest = set.closest_peaks(&phenome).unwrap();
        assert!(!closest.is_empty());
        let min_distance = closest
            .iter()
            .map(|p| hamming_distance(&phenome, p.position()).unwrap())
            .min()
            .unwrap();
        for p in &closest {
            assert_eq!(
                hamming_distance(&phenome, p.position()).unwrap(),
                min_distance
            );
        }
    }

    #[test]
    fn test_check_phenome() {
        let set = PeakSet::new(2, vec![peak(vec![1, 1], 1.0, 0.0)]).unwrap();
        assert!(set.check_phenome(&[0, 1]).is_ok());
        assert_eq!(
            set.check_phenome(&[0]),
            Err(BenchmarkError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            set.check_phenome(&[0, 2]),
            Err(BenchmarkError::NonBinaryPhene { index: 1, value: 2 })
        );
    }

    #[test]
    fn test_rand_uniform_peaks() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let peaks =
            PeakSet::rand_uniform_peaks(5, 12, (0.5, 2.0), (-1.0, 1.0), &mut rng).unwrap();

        assert_eq!(peaks.len(), 5);
        for p in &peaks {
            assert_eq!(p.num_variables(), 12);
            assert!(p.position().iter().all(|&bit| bit <= 1));
            assert!((0.5..=2.0).contains(&p.slope()));
            assert!((-1.0..=1.0).contains(&p.offset()));
        }
    }

    #[test]
    fn test_rand_uniform_peaks_zero_count() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let peaks =
            PeakSet::rand_uniform_peaks(0, 4, (1.0, 1.0), (0.0, 0.0), &mut rng).unwrap();
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_rand_uniform_peaks_rejects_bad_input() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        assert!(matches!(
            PeakSet::rand_uniform_peaks(1, 0, (1.0, 1.0), (0.0, 0.0), &mut rng),
            Err(BenchmarkError::Configuration(_))
        ));
        assert!(matches!(
            PeakSet::rand_uniform_peaks(1, 4, (2.0, 1.0), (0.0, 0.0), &mut rng),
            Err(BenchmarkError::Configuration(_))
        ));
        assert!(matches!(
            PeakSet::rand_uniform_peaks(1, 4, (1.0, 1.0), (0.0, f64::INFINITY), &mut rng),
            Err(BenchmarkError::InvalidNumericValue(_))
        ));
    }

    #[test]
    fn test_random_set_is_reproducible() {
        let config = PeakConfig::builder()
            .num_peaks(4)
            .slope_range(1.0, 2.0)
            .build();

        let mut rng1 = RandomNumberGenerator::from_seed(99);
        let mut rng2 = RandomNumberGenerator::from_seed(99);
        let set1 = PeakSet::random(10, &config, &mut rng1).unwrap();
        let set2 = PeakSet::random(10, &config, &mut rng2).unwrap();

        assert_eq!(set1.peaks(), set2.peaks());
    }

    #[test]
    fn test_config_defaults() {
        let config = PeakConfig::default();
        assert_eq!(config.get_num_peaks(), 2);
        assert_eq!(config.get_slope_range(), (1.0, 1.0));
        assert_eq!(config.get_offset_range(), (0.0, 0.0));

        let built = PeakConfig::builder().build();
        assert_eq!(built.get_num_peaks(), 2);
    }
}
