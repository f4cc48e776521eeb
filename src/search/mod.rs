pub mod clock;
pub mod config;
pub mod engine;
pub mod observer;

pub use clock::{Clock, SystemClock};
pub use config::{AnnealingConfig, AnnealingConfigBuilder};
pub use engine::{anneal, metropolis_probability, Annealer, BOLTZMANN_CONSTANT};
pub use observer::{
    AnnealingObserver, LevelRecord, NoopObserver, SearchStats, Termination, TrialOutcome,
    TrialRecord,
};
