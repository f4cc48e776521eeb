//! # Error Types
//!
//! This module defines the error type shared by the annealing engine, its
//! configuration and the model contract.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use annealing::error::{AnnealingError, Result};
//!
//! fn check_budget(trials: usize) -> Result<usize> {
//!     if trials > 1_000_000 {
//!         return Err(AnnealingError::Configuration("Too many trials".to_string()));
//!     }
//!     Ok(trials)
//! }
//!
//! assert!(check_budget(10).is_ok());
//! assert!(check_budget(10_000_000).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use annealing::error::{AnnealingError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> annealing::error::Result<f64> {
//!     scores.first().copied().ok_or_else_annealing(||
//!         AnnealingError::Model("No scores recorded".to_string())
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
///
/// A well-formed search never fails on its own; every variant traces back to
/// either a malformed configuration or a model that broke its contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealingError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when `copy_from` is asked to copy between two
    /// different concrete model kinds.
    #[error("Model mismatch: cannot copy a `{found}` into a `{expected}`")]
    ModelMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Error reported by a model from one of its fallible operations.
    #[error("Model error: {0}")]
    Model(String),
}

/// A specialized Result type for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealingError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, AnnealingError>` using a
    /// closure to generate the error.
    fn ok_or_else_annealing<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> AnnealingError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_annealing<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> AnnealingError,
    {
        self.ok_or_else(err_fn)
    }
}
