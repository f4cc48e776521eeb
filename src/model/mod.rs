//! # Model Trait
//!
//! The `Model` trait defines the capability set any problem instance must
//! provide to be searched by the annealing engine: scoring, in-place
//! perturbation, copying state from another instance, validity checking and
//! independent cloning.
//!
//! ## Example
//!
//! ```rust
//! use annealing::model::Model;
//! use annealing::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! impl Model for Counter {
//!     fn score(&self) -> f64 {
//!         -(self.value as f64).abs()
//!     }
//!
//!     fn perturb(&mut self, rng: &mut RandomNumberGenerator) {
//!         self.value += if rng.coin() { 1 } else { -1 };
//!     }
//!
//!     fn is_valid(&self) -> bool {
//!         self.value.abs() <= 100
//!     }
//! }
//! ```
//!
//! `clone` comes from `Clone`, and `copy_from` defaults to `Clone::clone_from`.
//! Override `copy_from` when a model can overwrite its state more cheaply or
//! needs to refuse an incompatible source.
//!
//! Models whose concrete type is only known at runtime go through
//! [`BoxedModel`], which checks kinds before copying.

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

pub mod boxed;

pub use boxed::{BoxedModel, DynModel};

/// Trait for problem-specific candidate solutions searched by the annealer.
///
/// The engine treats a model strictly as this capability set and never
/// inspects its internals. `score` is **maximized**.
pub trait Model: Clone + Debug {
    /// Returns the value to be maximized for the current state.
    ///
    /// Must be a pure function of the current state.
    fn score(&self) -> f64;

    /// Moves the instance in place to a neighbouring state.
    ///
    /// Repeated calls from the same state should explore different
    /// neighbours, so implementations draw from `rng`.
    fn perturb(&mut self, rng: &mut RandomNumberGenerator);

    /// Overwrites all state with `other`'s state.
    ///
    /// The default implementation delegates to `Clone::clone_from`, which
    /// reuses existing allocations where the type supports it.
    fn copy_from(&mut self, other: &Self) -> Result<()> {
        self.clone_from(other);
        Ok(())
    }

    /// Returns `true` iff the current state satisfies every domain constraint.
    ///
    /// An invalid state may still be scored, but the engine never accepts it.
    fn is_valid(&self) -> bool;
}
