//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for every
//! operator in the crate. Generators, mutations, crossovers and selections all take a
//! `&mut RandomNumberGenerator`, so a run seeded with [`RandomNumberGenerator::from_seed`]
//! replays exactly as long as the operators are invoked in the same order.
//!
//! ## Example
//!
//! ```rust
//! use agefit::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let mut replay = rng.clone();
//!
//! assert_eq!(rng.gen_index(10), replay.gen_index(10));
//! assert_eq!(rng.sample_indices(8, 3), replay.sample_indices(8, 3));
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the random draws
/// the genetic operators need.
#[derive(Clone, Debug)]
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
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws an index uniformly from `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero. Operators check for empty inputs before drawing.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws `amount` distinct indices from `[0, length)`.
    ///
    /// `amount` is capped at `length`, so asking for more indices than exist returns
    /// every index in a random order.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount.min(length)).into_vec()
    }

    /// Returns `true` with probability `p`.
    ///
    /// `p` is clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draws a float uniformly from `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agefit::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new();
    /// let value = rng.gen_uniform(-1.0, 1.0);
    ///
    /// assert!((-1.0..1.0).contains(&value));
    /// ```
    pub fn gen_uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
