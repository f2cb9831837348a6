//! # spiral-data: a double spiral toy dataset with train/validation loaders
//!
//! Generates two interleaved spiral arms, labels them `+1` and `-1`, lifts
//! each point `(x, y)` into `(x, y, x², y², xy, sin x, sin y)`, and splits
//! the result into two randomized batch loaders for a training loop.
//!
//! All randomness flows through a generator handle passed by the caller (or
//! a seed in the config), so runs are reproducible.
//!
//! ## Usage Example
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use spiral_data::config::SplitConfig;
//! use spiral_data::data::{train_valid_loaders, SpiralDataset};
//!
//! # fn main() -> spiral_data::Result<()> {
//! let mut rng = StdRng::seed_from_u64(42);
//! let dataset = SpiralDataset::generate(500, 0.2, &mut rng)?;
//!
//! let config = SplitConfig::default().batch_size(32).train_split(0.8);
//! let (mut train, mut valid) = train_valid_loaders(&dataset, &config, &mut rng)?;
//!
//! for epoch in 0..5 {
//!     for batch in train.iter()? {
//!         let batch = batch?;
//!         let _x = batch.features()?;
//!         let _y = batch.label_values();
//!     }
//!     println!("epoch {epoch}: {} validation batches", valid.iter()?.count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;

pub use config::{DataConfig, SplitConfig, SpiralConfig};
pub use error::{DataError, Result};
