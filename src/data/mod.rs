//! # Data Module
//!
//! Synthetic double spiral data and PyTorch-style batch loading.
//!
//! ## Key Components
//!
//! - [`Dataset`]: Trait for indexable labeled data sources
//! - [`SpiralDataset`]: Two interleaved spirals in a 7-feature space
//! - [`Sampler`]: Index sampling strategies
//! - [`DataLoader`]: Batched, restartable iteration over a sampler
//! - [`train_valid_loaders`]: Random train/validation split into two loaders
//!
//! ## Example
//!
//! ```ignore
//! use spiral_data::data::{train_valid_loaders, SpiralDataset};
//! use spiral_data::config::SplitConfig;
//!
//! let mut rng = rand::rng();
//! let dataset = SpiralDataset::generate(500, 0.2, &mut rng)?;
//! let config = SplitConfig::default().batch_size(32);
//! let (mut train, mut valid) = train_valid_loaders(&dataset, &config, &mut rng)?;
//!
//! for batch in train.iter()? {
//!     let batch = batch?;
//!     let x = batch.features()?;     // [batch, 7]
//!     let y = batch.label_values(); // [batch], +1 / -1
//! }
//! ```

pub mod dataloader;
pub mod dataset;
pub mod sampler;
pub mod spiral;
pub mod split;

pub use dataloader::{Batch, DataLoader, DataLoaderIterator};
pub use dataset::Dataset;
pub use sampler::{BatchSampler, Sampler, SubsetRandomSampler};
pub use spiral::{lift, Label, SpiralDataset, FEATURE_DIM};
pub use split::{split_indices, train_valid_loaders, IndexSplit};
