pub mod constraints;
pub mod error;
pub mod model;
pub mod models;
pub mod rng;
pub mod search;

// Re-export commonly used types for convenience
pub use error::{AnnealingError, OptionExt, Result};
pub use model::{BoxedModel, DynModel, Model};
pub use rng::RandomNumberGenerator;
pub use search::{anneal, Annealer, AnnealingConfig, AnnealingObserver, SearchStats};
