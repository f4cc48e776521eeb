//! # Type-erased models
//!
//! `BoxedModel` lets the engine search a model whose concrete type is only
//! known at runtime. Because two boxes may hold different kinds, its
//! `copy_from` checks the kind first and fails with
//! [`AnnealingError::ModelMismatch`] instead of silently doing nothing.
//!
//! ```rust
//! use annealing::model::{BoxedModel, Model};
//! use annealing::models::Quadratic;
//!
//! let mut live = BoxedModel::new(Quadratic::new(-2.0, 3.0, 2.0, -1.0));
//! let other = BoxedModel::new(Quadratic::new(-2.0, 3.0, 2.0, 0.5));
//!
//! live.copy_from(&other).unwrap();
//! assert_eq!(live.downcast_ref::<Quadratic>().unwrap().x(), 0.5);
//! ```

use std::any::{type_name, Any};
use std::fmt::Debug;

use crate::error::{AnnealingError, OptionExt, Result};
use crate::rng::RandomNumberGenerator;

use super::Model;

/// Object-safe mirror of [`Model`].
///
/// Blanket-implemented for every `Model + 'static`, so there is nothing to
/// implement by hand.
pub trait DynModel: Debug {
    fn dyn_score(&self) -> f64;
    fn dyn_perturb(&mut self, rng: &mut RandomNumberGenerator);
    fn dyn_copy_from(&mut self, other: &dyn DynModel) -> Result<()>;
    fn dyn_is_valid(&self) -> bool;
    fn clone_box(&self) -> Box<dyn DynModel>;
    fn as_any(&self) -> &dyn Any;
    /// Name of the concrete model type.
    fn kind(&self) -> &'static str;
}

impl<M> DynModel for M
where
    M: Model + 'static,
{
    fn dyn_score(&self) -> f64 {
        Model::score(self)
    }

    fn dyn_perturb(&mut self, rng: &mut RandomNumberGenerator) {
        Model::perturb(self, rng)
    }

    fn dyn_copy_from(&mut self, other: &dyn DynModel) -> Result<()> {
        let source = other.as_any().downcast_ref::<M>().ok_or_else_annealing(|| {
            AnnealingError::ModelMismatch {
                expected: type_name::<M>(),
                found: other.kind(),
            }
        })?;
        Model::copy_from(self, source)
    }

    fn dyn_is_valid(&self) -> bool {
        Model::is_valid(self)
    }

    fn clone_box(&self) -> Box<dyn DynModel> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> &'static str {
        type_name::<M>()
    }
}

/// A heap-allocated model of any kind, itself usable as a [`Model`].
#[derive(Debug)]
pub struct BoxedModel(Box<dyn DynModel>);

impl BoxedModel {
    /// Boxes a concrete model.
    pub fn new<M: Model + 'static>(model: M) -> Self {
        Self(Box::new(model))
    }

    /// Name of the concrete model type held in the box.
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    /// Returns the concrete model if it is of type `M`.
    pub fn downcast_ref<M: Model + 'static>(&self) -> Option<&M> {
        self.0.as_any().downcast_ref::<M>()
    }
}

impl Clone for BoxedModel {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl Model for BoxedModel {
    fn score(&self) -> f64 {
        self.0.dyn_score()
    }

    fn perturb(&mut self, rng: &mut RandomNumberGenerator) {
        self.0.dyn_perturb(rng)
    }

    fn copy_from(&mut self, other: &Self) -> Result<()> {
        self.0.dyn_copy_from(&*other.0)
    }

    fn is_valid(&self) -> bool {
        self.0.dyn_is_valid()
    }
}
