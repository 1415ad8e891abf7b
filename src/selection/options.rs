//! # AgeFitnessOptions
//!
//! The `AgeFitnessOptions` struct holds the configuration of
//! [`AgeFitnessSelection`](super::AgeFitnessSelection): how many individuals each
//! selection attempt samples, and how many attempts a single call may make.
//!
//! ## Example
//!
//! ```rust
//! use agefit::selection::AgeFitnessOptions;
//!
//! // Default parameters: pairwise sampling, derived attempt cap
//! let default_options = AgeFitnessOptions::default();
//! assert_eq!(default_options.selection_size(), 2);
//!
//! // Custom parameters through the builder
//! let options = AgeFitnessOptions::builder()
//!     .selection_size(10)
//!     .max_attempts(500)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.attempt_cap(40), 500);
//! ```
//!
//! ## Fields
//!
//! - `selection_size`: Number of individuals drawn, without replacement, per attempt.
//!   Capped at the current population size when the population is smaller.
//! - `max_attempts`: Upper bound on attempts per call. When unset, the cap is
//!   [`DEFAULT_ATTEMPTS_PER_INDIVIDUAL`] times the size of the population handed to
//!   selection.

use crate::error::{GeneticError, Result};

/// Sample size used when none is configured.
pub const DEFAULT_SELECTION_SIZE: usize = 2;

/// Attempts allowed per input individual when no explicit cap is configured.
pub const DEFAULT_ATTEMPTS_PER_INDIVIDUAL: usize = 10;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AgeFitnessOptions {
    selection_size: usize,
    max_attempts: Option<usize>,
}

impl AgeFitnessOptions {
    /// Creates options with the given sample size and the derived attempt cap.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `selection_size` is below 2. A sample
    /// of one individual can never contain a dominated member.
    pub fn new(selection_size: usize) -> Result<Self> {
        validate_selection_size(selection_size)?;
        Ok(Self {
            selection_size,
            max_attempts: None,
        })
    }

    pub fn selection_size(&self) -> usize {
        self.selection_size
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Returns the number of attempts allowed for a population of `population_size`.
    pub fn attempt_cap(&self, population_size: usize) -> usize {
        self.max_attempts.unwrap_or_else(|| {
            population_size
                .saturating_mul(DEFAULT_ATTEMPTS_PER_INDIVIDUAL)
                .max(1)
        })
    }

    /// Sets the sample size.
    pub fn set_selection_size(&mut self, selection_size: usize) -> Result<()> {
        validate_selection_size(selection_size)?;
        self.selection_size = selection_size;
        Ok(())
    }

    /// Sets an explicit attempt cap.
    pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<()> {
        validate_max_attempts(max_attempts)?;
        self.max_attempts = Some(max_attempts);
        Ok(())
    }

    /// Returns a builder for creating an `AgeFitnessOptions` instance.
    pub fn builder() -> AgeFitnessOptionsBuilder {
        AgeFitnessOptionsBuilder::default()
    }
}

impl Default for AgeFitnessOptions {
    fn default() -> Self {
        Self {
            selection_size: DEFAULT_SELECTION_SIZE,
            max_attempts: None,
        }
    }
}

fn validate_selection_size(selection_size: usize) -> Result<()> {
    if selection_size < 2 {
        return Err(GeneticError::Configuration(format!(
            "Selection size must be at least 2, got {}",
            selection_size
        )));
    }
    Ok(())
}

fn validate_max_attempts(max_attempts: usize) -> Result<()> {
    if max_attempts == 0 {
        return Err(GeneticError::Configuration(
            "Maximum number of selection attempts must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Builder for `AgeFitnessOptions`.
///
/// Provides a fluent interface for constructing `AgeFitnessOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct AgeFitnessOptionsBuilder {
    selection_size: Option<usize>,
    max_attempts: Option<usize>,
}

impl AgeFitnessOptionsBuilder {
    /// Sets the number of individuals sampled per attempt.
    pub fn selection_size(mut self, value: usize) -> Self {
        self.selection_size = Some(value);
        self
    }

    /// Sets the maximum number of attempts per call.
    pub fn max_attempts(mut self, value: usize) -> Self {
        self.max_attempts = Some(value);
        self
    }

    /// Builds the `AgeFitnessOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the selection size is below 2 or the
    /// attempt cap is zero.
    pub fn build(self) -> Result<AgeFitnessOptions> {
        let selection_size = self.selection_size.unwrap_or(DEFAULT_SELECTION_SIZE);
        validate_selection_size(selection_size)?;
        if let Some(max_attempts) = self.max_attempts {
            validate_max_attempts(max_attempts)?;
        }

        Ok(AgeFitnessOptions {
            selection_size,
            max_attempts: self.max_attempts,
        })
    }
}
