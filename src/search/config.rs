//! # AnnealingConfig
//!
//! The `AnnealingConfig` struct holds the control parameters of one search:
//! the initial and final temperatures, the cooling factor, the number of trials
//! per temperature level and the wall-clock deadline. A config is validated
//! when it is built and is immutable afterwards, so a search never fails
//! because of its configuration.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use annealing::search::AnnealingConfig;
//!
//! // Create a new AnnealingConfig with custom parameters
//! let custom = AnnealingConfig::new(1e6, 1e-10, 0.05, 100, Duration::from_secs(15)).unwrap();
//!
//! // Or use the builder, leaving unset fields at their defaults
//! let built = AnnealingConfig::builder()
//!     .cooling_factor(0.01)
//!     .trials_per_level(150)
//!     .build()
//!     .unwrap();
//!
//! // Invalid parameters are rejected up front
//! assert!(AnnealingConfig::new(1.0, 2.0, 0.05, 100, Duration::from_secs(1)).is_err());
//! ```
//!
//! ## Defaults
//!
//! | field               | default      |
//! |---------------------|--------------|
//! | initial temperature | `f64::MAX`   |
//! | final temperature   | `1e-10`      |
//! | cooling factor      | `0.05`       |
//! | trials per level    | `100`        |
//! | deadline            | 10 seconds   |

use std::time::Duration;

use crate::error::{AnnealingError, Result};

const DEFAULT_INITIAL_TEMPERATURE: f64 = f64::MAX;
const DEFAULT_FINAL_TEMPERATURE: f64 = 1e-10;
const DEFAULT_COOLING_FACTOR: f64 = 0.05;
const DEFAULT_TRIALS_PER_LEVEL: usize = 100;
const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AnnealingConfigBuilder"))]
pub struct AnnealingConfig {
    initial_temperature: f64,
    final_temperature: f64,
    /// Fraction of the temperature removed after each level.
    cooling_factor: f64,
    /// Each level runs `trials_per_level + 1` trials.
    trials_per_level: usize,
    deadline: Duration,
}

impl AnnealingConfig {
    /// Creates a new `AnnealingConfig` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `initial_temperature` - The temperature of the first level. Must be finite.
    /// * `final_temperature` - The cooling floor. Must be finite, non-negative and
    ///   strictly below `initial_temperature`.
    /// * `cooling_factor` - The fraction of temperature removed per level, in `(0, 1)`.
    /// * `trials_per_level` - The trial counter start value; a level runs one more trial.
    /// * `deadline` - The wall-clock budget for the whole search. Must be non-zero.
    ///
    /// # Errors
    ///
    /// Returns `AnnealingError::Configuration` if any of the above is violated.
    pub fn new(
        initial_temperature: f64,
        final_temperature: f64,
        cooling_factor: f64,
        trials_per_level: usize,
        deadline: Duration,
    ) -> Result<Self> {
        let config = Self {
            initial_temperature,
            final_temperature,
            cooling_factor,
            trials_per_level,
            deadline,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() {
            return Err(AnnealingError::Configuration(format!(
                "Initial temperature must be finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.final_temperature.is_finite() || self.final_temperature < 0.0 {
            return Err(AnnealingError::Configuration(format!(
                "Final temperature must be finite and non-negative, got {}",
                self.final_temperature
            )));
        }
        if self.initial_temperature <= self.final_temperature {
            return Err(AnnealingError::Configuration(format!(
                "Initial temperature ({}) must exceed final temperature ({})",
                self.initial_temperature, self.final_temperature
            )));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(AnnealingError::Configuration(format!(
                "Cooling factor must be strictly between 0 and 1, got {}",
                self.cooling_factor
            )));
        }
        if self.deadline.is_zero() {
            return Err(AnnealingError::Configuration(
                "Deadline must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn get_final_temperature(&self) -> f64 {
        self.final_temperature
    }

    pub fn get_cooling_factor(&self) -> f64 {
        self.cooling_factor
    }

    pub fn get_trials_per_level(&self) -> usize {
        self.trials_per_level
    }

    pub fn get_deadline(&self) -> Duration {
        self.deadline
    }

    /// Returns the temperature of the level following one at `temperature`.
    pub fn next_temperature(&self, temperature: f64) -> f64 {
        temperature * (1.0 - self.cooling_factor)
    }

    /// Returns a builder for creating an `AnnealingConfig` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use annealing::search::AnnealingConfig;
    ///
    /// let config = AnnealingConfig::builder()
    ///     .initial_temperature(1e6)
    ///     .final_temperature(1e-10)
    ///     .cooling_factor(0.05)
    ///     .trials_per_level(100)
    ///     .deadline(Duration::from_secs(15))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.get_trials_per_level(), 100);
    /// ```
    pub fn builder() -> AnnealingConfigBuilder {
        AnnealingConfigBuilder::default()
    }
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            final_temperature: DEFAULT_FINAL_TEMPERATURE,
            cooling_factor: DEFAULT_COOLING_FACTOR,
            trials_per_level: DEFAULT_TRIALS_PER_LEVEL,
            deadline: DEFAULT_DEADLINE,
        }
    }
}

/// Builder for `AnnealingConfig`.
///
/// Provides a fluent interface for constructing `AnnealingConfig` instances.
/// With the `serde` feature enabled this is also the shape a config file is
/// read into, so deserialized configs go through the same validation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct AnnealingConfigBuilder {
    initial_temperature: Option<f64>,
    final_temperature: Option<f64>,
    cooling_factor: Option<f64>,
    trials_per_level: Option<usize>,
    deadline: Option<Duration>,
}

impl AnnealingConfigBuilder {
    pub fn initial_temperature(mut self, value: f64) -> Self {
        self.initial_temperature = Some(value);
        self
    }

    pub fn final_temperature(mut self, value: f64) -> Self {
        self.final_temperature = Some(value);
        self
    }

    pub fn cooling_factor(mut self, value: f64) -> Self {
        self.cooling_factor = Some(value);
        self
    }

    pub fn trials_per_level(mut self, value: usize) -> Self {
        self.trials_per_level = Some(value);
        self
    }

    pub fn deadline(mut self, value: Duration) -> Self {
        self.deadline = Some(value);
        self
    }

    /// Builds and validates the `AnnealingConfig` instance.
    pub fn build(self) -> Result<AnnealingConfig> {
        AnnealingConfig::new(
            self.initial_temperature.unwrap_or(DEFAULT_INITIAL_TEMPERATURE),
            self.final_temperature.unwrap_or(DEFAULT_FINAL_TEMPERATURE),
            self.cooling_factor.unwrap_or(DEFAULT_COOLING_FACTOR),
            self.trials_per_level.unwrap_or(DEFAULT_TRIALS_PER_LEVEL),
            self.deadline.unwrap_or(DEFAULT_DEADLINE),
        )
    }
}

impl TryFrom<AnnealingConfigBuilder> for AnnealingConfig {
    type Error = AnnealingError;

    fn try_from(builder: AnnealingConfigBuilder) -> Result<Self> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_default_config() {
        let config = AnnealingConfig::default();
        assert_eq!(config.get_initial_temperature(), f64::MAX);
        assert_eq!(config.get_final_temperature(), 1e-10);
        assert_eq!(config.get_cooling_factor(), 0.05);
        assert_eq!(config.get_trials_per_level(), 100);
        assert_eq!(config.get_deadline(), secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_default() {
        let built = AnnealingConfig::builder().build().unwrap();
        assert_eq!(built, AnnealingConfig::default());
    }

    #[test]
    fn test_new_accepts_zero_trials_and_zero_floor() {
        let config = AnnealingConfig::new(10.0, 0.0, 0.5, 0, secs(1)).unwrap();
        assert_eq!(config.get_trials_per_level(), 0);
        assert_eq!(config.get_final_temperature(), 0.0);
    }

    #[test]
    fn test_initial_must_exceed_final() {
        let result = AnnealingConfig::new(1.0, 1.0, 0.05, 100, secs(1));
        match result {
            Err(AnnealingError::Configuration(msg)) => {
                assert!(msg.contains("must exceed final temperature"));
            }
            _ => panic!("Expected Configuration error"),
        }
        assert!(AnnealingConfig::new(1.0, 2.0, 0.05, 100, secs(1)).is_err());
    }

    #[test]
    fn test_temperatures_must_be_finite() {
        assert!(AnnealingConfig::new(f64::INFINITY, 1.0, 0.05, 100, secs(1)).is_err());
        assert!(AnnealingConfig::new(f64::NAN, 1.0, 0.05, 100, secs(1)).is_err());
        assert!(AnnealingConfig::new(10.0, f64::NAN, 0.05, 100, secs(1)).is_err());
        assert!(AnnealingConfig::new(10.0, -1.0, 0.05, 100, secs(1)).is_err());
    }

    #[test]
    fn test_cooling_factor_bounds() {
        for factor in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(
                AnnealingConfig::new(10.0, 1.0, factor, 100, secs(1)).is_err(),
                "cooling factor {} should be rejected",
                factor
            );
        }
        assert!(AnnealingConfig::new(10.0, 1.0, 0.001, 100, secs(1)).is_ok());
        assert!(AnnealingConfig::new(10.0, 1.0, 0.999, 100, secs(1)).is_ok());
    }

    #[test]
    fn test_deadline_must_be_positive() {
        let result = AnnealingConfig::new(10.0, 1.0, 0.05, 100, Duration::ZERO);
        assert!(matches!(result, Err(AnnealingError::Configuration(_))));
        assert!(AnnealingConfig::new(10.0, 1.0, 0.05, 100, Duration::from_nanos(1)).is_ok());
    }

    #[test]
    fn test_builder_validates() {
        let result = AnnealingConfig::builder()
            .initial_temperature(1.0)
            .final_temperature(5.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_next_temperature() {
        let config = AnnealingConfig::new(100.0, 1.0, 0.25, 10, secs(1)).unwrap();
        assert_eq!(config.next_temperature(100.0), 75.0);
        assert_eq!(config.next_temperature(config.next_temperature(100.0)), 56.25);
    }

    #[test]
    fn test_try_from_builder() {
        let builder = AnnealingConfig::builder().cooling_factor(0.1);
        let config = AnnealingConfig::try_from(builder).unwrap();
        assert_eq!(config.get_cooling_factor(), 0.1);
    }
}
