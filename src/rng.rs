//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides a simple interface for drawing
//! random bits and random floating-point numbers using the `rand` crate.
//!
//! Randomness in this library is confined to problem construction: peaks are
//! drawn once, and evaluation never touches the generator again. Passing the
//! generator explicitly (instead of relying on a process-global source) lets
//! tests and benchmarks construct reproducible landscapes from a seed.
//!
//! ## Example
//!
//! ```rust
//! use multipeak::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let position = rng.random_bits(10);
//!
//! assert_eq!(position.len(), 10);
//! assert!(position.iter().all(|&bit| bit <= 1));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides methods for
/// drawing random bits and random numbers from inclusive ranges.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    ///
    /// # Returns
    ///
    /// A new `RandomNumberGenerator` instance.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a single uniformly random bit.
    pub fn random_bit(&mut self) -> u8 {
        self.rng.gen_range(0..=1)
    }

    /// Draws `num` uniformly random bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multipeak::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new();
    /// let bits = rng.random_bits(5);
    ///
    /// assert_eq!(bits.len(), 5);
    /// ```
    pub fn random_bits(&mut self, num: usize) -> Vec<u8> {
        (0..num).map(|_| self.random_bit()).collect()
    }

    /// Draws a random floating-point number uniformly from the inclusive
    /// range `[from, to]`.
    ///
    /// The caller must ensure `from <= to`; both bounds may coincide, in
    /// which case that single value is returned.
    pub fn uniform_inclusive(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..=to)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
