//! # Annealer
//!
//! The annealing engine. It searches a [`Model`] in place, cooling
//! geometrically from the initial temperature until either the deadline has
//! passed or the temperature reaches the floor, whichever comes first.
//!
//! Each temperature level runs `trials_per_level + 1` trials against a
//! reference energy that only moves on committed trials. A trial perturbs the
//! *live* model and compares it with that reference; a rejected perturbation is
//! not undone, so later trials in the same level start from wherever the
//! previous ones left the live model. Only at the end of the level is the live
//! model overwritten with the last committed snapshot.
//!
//! The engine works with energy `-score()`, so a higher score is a lower
//! energy and the search maximizes `score()`.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use annealing::search::{Annealer, AnnealingConfig};
//! use annealing::model::Model;
//! use annealing::models::Quadratic;
//! use annealing::rng::RandomNumberGenerator;
//!
//! let config = AnnealingConfig::new(1e6, 1e-10, 0.05, 100, Duration::from_secs(15)).unwrap();
//! let mut model = Quadratic::new(-2.0, 3.0, 2.0, -1.0);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! Annealer::new(config).run(&mut model, &mut rng).unwrap();
//! assert!(model.score() > Quadratic::new(-2.0, 3.0, 2.0, -1.0).score());
//! ```

use tracing::{debug, debug_span, trace};

use super::clock::{Clock, SystemClock};
use super::config::AnnealingConfig;
use super::observer::{
    AnnealingObserver, LevelRecord, NoopObserver, Termination, TrialOutcome, TrialRecord,
};
use crate::error::Result;
use crate::model::Model;
use crate::rng::RandomNumberGenerator;

/// Boltzmann constant in eV/K, the scale of the acceptance criterion.
pub const BOLTZMANN_CONSTANT: f64 = 8.6173432e-5;

/// Probability of accepting an energy change of `delta` at `temperature`.
///
/// Values above one (improving moves) are returned as is.
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    (-delta / (BOLTZMANN_CONSTANT * temperature)).exp()
}

/// Runs simulated annealing searches with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Annealer<C = SystemClock> {
    config: AnnealingConfig,
    clock: C,
}

impl Annealer<SystemClock> {
    /// Creates an annealer that measures its deadline on the wall clock.
    pub fn new(config: AnnealingConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Annealer<C> {
    /// Creates an annealer that reads time from `clock`.
    pub fn with_clock(config: AnnealingConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Searches `model` in place.
    ///
    /// On return `model` holds the last committed state, which is its input
    /// state if no trial was ever committed.
    ///
    /// # Errors
    ///
    /// A well-formed search does not fail. Errors returned by the model's
    /// `copy_from` are propagated unchanged and end the search, leaving
    /// `model` in whatever state the failed copy left it.
    pub fn run<M: Model>(&self, model: &mut M, rng: &mut RandomNumberGenerator) -> Result<()> {
        self.run_observed(model, rng, &mut NoopObserver)
    }

    /// Searches `model` in place, reporting progress to `observer`.
    pub fn run_observed<M, O>(
        &self,
        model: &mut M,
        rng: &mut RandomNumberGenerator,
        observer: &mut O,
    ) -> Result<()>
    where
        M: Model,
        O: AnnealingObserver<M>,
    {
        let config = &self.config;
        let span = debug_span!(
            "anneal",
            initial_temperature = config.get_initial_temperature(),
            final_temperature = config.get_final_temperature(),
            cooling_factor = config.get_cooling_factor(),
            trials_per_level = config.get_trials_per_level(),
            deadline_ms = config.get_deadline().as_millis() as u64,
        );
        let _guard = span.enter();

        let mut snapshot = model.clone();
        let mut reference_energy = -snapshot.score();
        // An unrepresentable deadline instant leaves only the temperature floor.
        let deadline = self.clock.now().checked_add(config.get_deadline());
        let mut temperature = config.get_initial_temperature();

        let mut level = 0usize;
        let mut total_trials = 0usize;
        let mut total_committed = 0usize;

        debug!(initial_score = -reference_energy, "annealing started");

        let termination = loop {
            if deadline.is_some_and(|deadline| self.clock.now() >= deadline) {
                break Termination::Deadline;
            }
            if temperature <= config.get_final_temperature() {
                break Termination::Frozen;
            }

            let mut trials = 0usize;
            let mut committed = 0usize;

            for trial in 0..=config.get_trials_per_level() {
                model.perturb(rng);

                let energy = -model.score();
                let delta = energy - reference_energy;
                let draw = rng.uniform();
                let probability = metropolis_probability(delta, temperature);

                let outcome = if (delta <= 0.0 || draw < probability) && model.is_valid() {
                    if delta != 0.0 {
                        reference_energy = energy;
                        snapshot.copy_from(model)?;
                        observer.on_accept(temperature, &snapshot);
                        committed += 1;
                        TrialOutcome::Committed
                    } else {
                        TrialOutcome::Unchanged
                    }
                } else {
                    TrialOutcome::Rejected
                };

                trials += 1;
                observer.on_trial(&TrialRecord {
                    level,
                    trial,
                    temperature,
                    delta,
                    probability,
                    draw,
                    outcome,
                });
            }

            // Discard every uncommitted perturbation made during the level.
            model.copy_from(&snapshot)?;

            observer.on_level_end(
                &LevelRecord {
                    level,
                    temperature,
                    reference_energy,
                    trials,
                    committed,
                },
                model,
                &snapshot,
            );
            trace!(
                level,
                temperature,
                reference_energy,
                committed,
                "temperature level complete"
            );

            total_trials += trials;
            total_committed += committed;
            temperature = config.next_temperature(temperature);
            level += 1;
        };

        observer.on_finish(termination);
        debug!(
            levels = level,
            trials = total_trials,
            committed = total_committed,
            final_score = -reference_energy,
            ?termination,
            "annealing finished"
        );

        Ok(())
    }
}

/// Searches `model` in place with `config`, measuring the deadline on the wall clock.
///
/// Shorthand for `Annealer::new(config.clone()).run(model, rng)`.
pub fn anneal<M: Model>(
    config: &AnnealingConfig,
    model: &mut M,
    rng: &mut RandomNumberGenerator,
) -> Result<()> {
    Annealer::new(config.clone()).run(model, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchStats;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct Plateau;

    impl Model for Plateau {
        fn score(&self) -> f64 {
            1.0
        }

        fn perturb(&mut self, _rng: &mut RandomNumberGenerator) {}

        fn is_valid(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_metropolis_probability() {
        // improving and neutral moves are always at least certain
        assert!(metropolis_probability(-1.0, 1.0) > 1.0);
        assert_eq!(metropolis_probability(0.0, 1.0), 1.0);

        let t = 1.0 / BOLTZMANN_CONSTANT;
        assert!((metropolis_probability(1.0, t) - (-1.0f64).exp()).abs() < 1e-12);

        // colder means stricter
        assert!(metropolis_probability(1.0, 100.0) < metropolis_probability(1.0, 1000.0));
        assert_eq!(metropolis_probability(1.0, 1e-12), 0.0);
    }

    #[test]
    fn test_metropolis_probability_at_extreme_temperature() {
        let p = metropolis_probability(1e6, f64::MAX);
        assert!(p.is_finite());
        assert!(p > 0.999_999);
    }

    #[test]
    fn test_each_level_runs_one_extra_trial() {
        let config = AnnealingConfig::new(100.0, 1.0, 0.5, 4, Duration::from_secs(60)).unwrap();
        let mut stats = SearchStats::default();
        let mut rng = RandomNumberGenerator::from_seed(0);

        Annealer::new(config)
            .run_observed(&mut Plateau, &mut rng, &mut stats)
            .unwrap();

        // 100, 50, 25, 12.5, 6.25, 3.125, 1.5625 are above the floor
        assert_eq!(stats.levels, 7);
        assert_eq!(stats.trials, 7 * 5);
        assert_eq!(stats.unchanged, stats.trials);
        assert_eq!(stats.last_temperature, Some(1.5625));
        assert_eq!(stats.termination, Some(Termination::Frozen));
    }

    #[test]
    fn test_anneal_shorthand() {
        let config = AnnealingConfig::new(10.0, 1.0, 0.5, 0, Duration::from_secs(60)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut model = Plateau;
        assert!(anneal(&config, &mut model, &mut rng).is_ok());
        assert_eq!(model, Plateau);
    }
}
