//! # Error Types
//!
//! This module defines the error type shared by every operator in the crate.
//! Errors fall into three groups:
//!
//! - **Validation**: bad configuration values, or a selection target larger than the
//!   population it is applied to.
//! - **Precondition violations**: chromosomes of mismatched length, or empty chromosomes
//!   handed to operators that index into them.
//! - **Unevaluated individuals**: selection asked to rank individuals without a fitness.
//!
//! Every error is local to the call that produced it. A failed call never leaves its
//! inputs modified.
//!
//! ## Examples
//!
//! ```rust
//! use agefit::error::{GeneticError, Result};
//!
//! fn check_target(target: usize, available: usize) -> Result<()> {
//!     if target > available {
//!         return Err(GeneticError::TargetSizeOutOfRange { target, available });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_target(3, 5).is_ok());
//! assert!(check_target(6, 5).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while generating, varying or selecting individuals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a selection target exceeds the population size.
    #[error("Target population size {target} exceeds the {available} individuals available")]
    TargetSizeOutOfRange { target: usize, available: usize },

    /// Error that occurs when two chromosomes that must line up have different lengths.
    #[error("Length mismatch: chromosome of length {left} paired with chromosome of length {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Error that occurs when an operator needs at least one value to work on.
    #[error("Empty chromosome error: Cannot operate on a chromosome without values")]
    EmptyChromosome,

    /// Error that occurs when selection meets an individual without a valid fitness.
    #[error("Individual at index {index} has not been evaluated")]
    UnevaluatedIndividual { index: usize },

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for this crate's operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;
