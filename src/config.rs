//! Settings for the `smooth` command.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use sketchbook_smoothing::{SmoothedSeries, SmoothingError, linspace, noisy_sine};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Sample generation and smoothing parameters.
///
/// Every field is optional in TOML; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SmoothingConfig {
    /// Number of samples.
    #[serde(default = "default_samples")]
    samples: usize,

    /// First sample position.
    #[serde(default = "default_start")]
    start: f64,

    /// Last sample position.
    #[serde(default = "default_stop")]
    stop: f64,

    /// Standard deviation of the Gaussian noise added to `sin(x)`.
    #[serde(default = "default_noise_std")]
    noise_std: f64,

    /// Moving-average window in samples.
    #[serde(default = "default_window")]
    window: usize,

    /// Confidence level of the band.
    #[serde(default = "default_confidence")]
    confidence: f64,

    /// RNG seed; a fresh OS seed is used when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_samples() -> usize {
    100
}

fn default_start() -> f64 {
    0.0
}

fn default_stop() -> f64 {
    10.0
}

fn default_noise_std() -> f64 {
    0.1
}

fn default_window() -> usize {
    5
}

fn default_confidence() -> f64 {
    0.95
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            start: default_start(),
            stop: default_stop(),
            noise_std: default_noise_std(),
            window: default_window(),
            confidence: default_confidence(),
            seed: None,
        }
    }
}

impl SmoothingConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(samples = config.samples, window = config.window, "Config loaded successfully");
        Ok(config)
    }

    /// Generates noisy samples and smooths them.
    ///
    /// The same seed always yields the same series.
    #[instrument(skip(self), fields(samples = self.samples, seed = ?self.seed))]
    pub fn generate(&self) -> Result<SmoothedSeries, SmoothingError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let x = linspace(self.start, self.stop, self.samples);
        let y = noisy_sine(&x, self.noise_std, &mut rng)?;
        SmoothedSeries::build(x, y, self.window, self.confidence)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
