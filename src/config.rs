// --- File: src/config.rs ---

//! Configuration for dataset generation and train/validation loaders.
//!
//! Both halves can be built in code with the builder setters or loaded
//! from a JSON file:
//!
//! ```json
//! {
//!   "dataset": { "n_points": 500, "noise": 0.2, "seed": 7 },
//!   "loaders": { "batch_size": 32, "train_split": 0.8 }
//! }
//! ```
//!
//! Missing fields fall back to their defaults.

use crate::error::{DataError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Builds the generator used by a config: seeded when `seed` is set,
/// otherwise drawn from the thread-local generator.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Parameters of the double spiral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Requested number of points. Odd values are truncated to the even count below.
    pub n_points: usize,
    /// Magnitude of the uniform perturbation applied to each coordinate.
    pub noise: f64,
    /// Optional seed for reproducible generation.
    pub seed: Option<u64>,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            n_points: 500,
            noise: 0.2,
            seed: None,
        }
    }
}

impl SpiralConfig {
    pub fn n_points(mut self, n: usize) -> Self {
        self.n_points = n;
        self
    }

    pub fn noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(DataError::InvalidNoise(self.noise));
        }
        Ok(())
    }

    /// Generator for this config.
    pub fn rng(&self) -> StdRng {
        make_rng(self.seed)
    }
}

/// Parameters of the train/validation split and its loaders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Number of samples per batch.
    pub batch_size: usize,
    /// Fraction of the dataset assigned to the training pool.
    pub train_split: f64,
    /// Shuffle the index sequence before splitting.
    pub shuffle: bool,
    /// Drop the last incomplete batch of each epoch.
    pub drop_last: bool,
    /// Optional seed for reproducible splitting and batch order.
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            train_split: 0.8,
            shuffle: true,
            drop_last: false,
            seed: None,
        }
    }
}

impl SplitConfig {
    pub fn batch_size(mut self, bs: usize) -> Self {
        self.batch_size = bs;
        self
    }

    pub fn train_split(mut self, split: f64) -> Self {
        self.train_split = split;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DataError::InvalidBatchSize);
        }
        if !(0.0..=1.0).contains(&self.train_split) {
            return Err(DataError::InvalidSplit(self.train_split));
        }
        Ok(())
    }

    /// Generator for this config.
    pub fn rng(&self) -> StdRng {
        make_rng(self.seed)
    }
}

/// Complete data pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dataset: SpiralConfig,
    pub loaders: SplitConfig,
}

impl DataConfig {
    pub fn validate(&self) -> Result<()> {
        self.dataset.validate()?;
        self.loaders.validate()
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DataConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = DataConfig::default();
        assert_eq!(config.dataset.n_points, 500);
        assert_eq!(config.dataset.noise, 0.2);
        assert_eq!(config.loaders.train_split, 0.8);
        assert!(config.loaders.shuffle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DataConfig::from_json_str(
            r#"{ "dataset": { "n_points": 10 }, "loaders": { "batch_size": 4 } }"#,
        )
        .unwrap();
        assert_eq!(config.dataset.n_points, 10);
        assert_eq!(config.dataset.noise, 0.2);
        assert_eq!(config.loaders.batch_size, 4);
        assert_eq!(config.loaders.train_split, 0.8);
        assert_eq!(config.loaders.seed, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            SpiralConfig::default().noise(-0.1).validate(),
            Err(DataError::InvalidNoise(_))
        ));
        assert!(matches!(
            SpiralConfig::default().noise(f64::NAN).validate(),
            Err(DataError::InvalidNoise(_))
        ));
        assert!(matches!(
            SplitConfig::default().batch_size(0).validate(),
            Err(DataError::InvalidBatchSize)
        ));
        assert!(matches!(
            SplitConfig::default().train_split(1.5).validate(),
            Err(DataError::InvalidSplit(_))
        ));
        assert!(matches!(
            DataConfig::from_json_str(r#"{ "loaders": { "train_split": -0.2 } }"#),
            Err(DataError::InvalidSplit(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            DataConfig::from_json_str("{ not json"),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SplitConfig::default().seed(42);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
