//! # Search observers
//!
//! An `AnnealingObserver` is told what the engine does: every trial, every
//! snapshot refresh, every finished level and how the search ended. Observers
//! only look; they cannot change the trajectory.
//!
//! `SearchStats` is the observer most callers want:
//!
//! ```rust
//! use annealing::search::{Annealer, AnnealingConfig, SearchStats};
//! use annealing::models::Quadratic;
//! use annealing::rng::RandomNumberGenerator;
//!
//! let config = AnnealingConfig::builder()
//!     .initial_temperature(1e3)
//!     .final_temperature(1.0)
//!     .build()
//!     .unwrap();
//! let mut model = Quadratic::new(-2.0, 3.0, 2.0, -1.0);
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let mut stats = SearchStats::default();
//!
//! Annealer::new(config)
//!     .run_observed(&mut model, &mut rng, &mut stats)
//!     .unwrap();
//!
//! assert_eq!(stats.trials, stats.levels * 101);
//! ```

use crate::model::Model;

/// How a trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// Accepted with a non-zero energy change; the snapshot was refreshed.
    Committed,
    /// Accepted with a zero energy change; nothing was recorded.
    Unchanged,
    /// Failed the energy test or the validity check.
    Rejected,
}

/// Why the outer cooling loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The wall-clock deadline had passed at a level boundary.
    Deadline,
    /// The temperature reached the configured floor.
    Frozen,
}

/// One perturb-score-decide cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    pub level: usize,
    /// Index of the trial within its level, counting from zero.
    pub trial: usize,
    pub temperature: f64,
    /// Energy of the live model minus the reference energy.
    pub delta: f64,
    /// Metropolis acceptance probability for `delta`.
    pub probability: f64,
    /// The uniform draw compared against `probability`.
    pub draw: f64,
    pub outcome: TrialOutcome,
}

/// Summary of a completed temperature level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRecord {
    pub level: usize,
    pub temperature: f64,
    /// Reference energy at the end of the level.
    pub reference_energy: f64,
    pub trials: usize,
    pub committed: usize,
}

/// Receives callbacks during a search. Every method defaults to a no-op.
pub trait AnnealingObserver<M: Model> {
    fn on_trial(&mut self, _trial: &TrialRecord) {}

    /// Called right after `snapshot` took over the live state.
    fn on_accept(&mut self, _temperature: f64, _snapshot: &M) {}

    /// Called after the live model was resynchronized, before cooling.
    fn on_level_end(&mut self, _level: &LevelRecord, _live: &M, _snapshot: &M) {}

    fn on_finish(&mut self, _termination: Termination) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<M: Model> AnnealingObserver<M> for NoopObserver {}

/// Aggregate counters for a finished search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    pub levels: usize,
    pub trials: usize,
    pub committed: usize,
    pub unchanged: usize,
    pub rejected: usize,
    /// Temperature of the last completed level.
    pub last_temperature: Option<f64>,
    pub termination: Option<Termination>,
}

impl SearchStats {
    /// Share of trials that passed the acceptance test.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            (self.committed + self.unchanged) as f64 / self.trials as f64
        }
    }
}

impl<M: Model> AnnealingObserver<M> for SearchStats {
    fn on_trial(&mut self, trial: &TrialRecord) {
        self.trials += 1;
        match trial.outcome {
            TrialOutcome::Committed => self.committed += 1,
            TrialOutcome::Unchanged => self.unchanged += 1,
            TrialOutcome::Rejected => self.rejected += 1,
        }
    }

    fn on_level_end(&mut self, level: &LevelRecord, _live: &M, _snapshot: &M) {
        self.levels += 1;
        self.last_temperature = Some(level.temperature);
    }

    fn on_finish(&mut self, termination: Termination) {
        self.termination = Some(termination);
    }
}
