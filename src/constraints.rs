//! # Constraints Module
//!
//! This module provides a small framework for expressing the domain
//! constraints behind a model's `is_valid`. Constraints report every
//! violation they find, which makes an invalid state explainable, while
//! `is_satisfied` gives the engine a cheap yes/no answer.
//!
//! ## Basic Usage
//!
//! ```rust
//! use annealing::constraints::{Constraint, ConstraintSet, ConstraintViolation};
//!
//! #[derive(Debug)]
//! struct NoDuplicates;
//!
//! impl Constraint<Vec<u32>> for NoDuplicates {
//!     fn check(&self, values: &Vec<u32>) -> Vec<ConstraintViolation> {
//!         let mut violations = Vec::new();
//!         for i in 0..values.len() {
//!             for j in i + 1..values.len() {
//!                 if values[i] == values[j] {
//!                     violations.push(ConstraintViolation::new(
//!                         "NoDuplicates",
//!                         format!("Duplicate value {} at positions {} and {}", values[i], i, j),
//!                     ));
//!                 }
//!             }
//!         }
//!         violations
//!     }
//! }
//!
//! let constraints = ConstraintSet::new().with_constraint(NoDuplicates);
//! assert!(constraints.is_valid(&vec![1, 2, 3]));
//! assert_eq!(constraints.check_all(&vec![1, 2, 1]).len(), 1);
//! ```

use std::fmt::{Debug, Display};
use std::sync::Arc;

/// Represents a violation of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    /// The name of the constraint that was violated
    constraint_name: String,
    /// A description of the violation
    description: String,
    /// An optional severity score (higher means more severe)
    severity: Option<f64>,
}

impl ConstraintViolation {
    /// Creates a new constraint violation with the given name and description.
    pub fn new<S: Into<String>, D: Into<String>>(constraint_name: S, description: D) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            description: description.into(),
            severity: None,
        }
    }

    /// Creates a new constraint violation with the given name, description, and severity.
    pub fn with_severity<S: Into<String>, D: Into<String>>(
        constraint_name: S,
        description: D,
        severity: f64,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            description: description.into(),
            severity: Some(severity),
        }
    }

    pub fn constraint_name(&self) -> &str {
        &self.constraint_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Option<f64> {
        self.severity
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Constraint '{}' violated: {}{}",
            self.constraint_name(),
            self.description(),
            self.severity()
                .map(|s| format!(" (severity: {})", s))
                .unwrap_or_default()
        )
    }
}

/// Trait for a single domain constraint over states of type `M`.
pub trait Constraint<M>: Debug + Send + Sync {
    /// Checks the state against this constraint.
    ///
    /// Returns every violation found. An empty vector means the constraint holds.
    fn check(&self, model: &M) -> Vec<ConstraintViolation>;

    /// Returns `true` if the state satisfies this constraint.
    ///
    /// The default implementation collects all violations; override it with an
    /// early-exit scan when validity is checked on a hot path.
    fn is_satisfied(&self, model: &M) -> bool {
        self.check(model).is_empty()
    }
}

/// An ordered collection of constraints evaluated together.
#[derive(Debug, Clone)]
pub struct ConstraintSet<M> {
    constraints: Vec<Arc<dyn Constraint<M>>>,
}

impl<M> ConstraintSet<M> {
    /// Creates a new empty constraint set.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint, builder style.
    pub fn with_constraint<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<M> + 'static,
    {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// Adds a constraint to the set.
    pub fn add_constraint<C>(&mut self, constraint: C) -> &mut Self
    where
        C: Constraint<M> + 'static,
    {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// Collects the violations of every constraint, in insertion order.
    pub fn check_all(&self, model: &M) -> Vec<ConstraintViolation> {
        self.constraints
            .iter()
            .flat_map(|constraint| constraint.check(model))
            .collect()
    }

    /// Returns `true` if every constraint is satisfied.
    pub fn is_valid(&self, model: &M) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied(model))
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<M> Default for ConstraintSet<M> {
    fn default() -> Self {
        Self::new()
    }
}
