// --- File: src/data/split.rs ---

//! Train/validation splitting of a dataset into two random batch loaders.

use super::dataloader::DataLoader;
use super::dataset::Dataset;
use super::sampler::SubsetRandomSampler;
use crate::config::SplitConfig;
use crate::error::{DataError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Disjoint partition of `0..len` into training and validation positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSplit {
    pub train: Vec<usize>,
    pub valid: Vec<usize>,
}

impl IndexSplit {
    /// Total number of positions covered.
    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions the positions `0..len`.
///
/// The sequence is shuffled first when `shuffle` is set. The training pool
/// receives `floor(train_split * len)` positions taken from the tail of the
/// sequence; the validation pool is the remaining head.
pub fn split_indices<R: Rng>(
    len: usize,
    train_split: f64,
    shuffle: bool,
    rng: &mut R,
) -> Result<IndexSplit> {
    if !(0.0..=1.0).contains(&train_split) {
        return Err(DataError::InvalidSplit(train_split));
    }

    let mut indices: Vec<usize> = (0..len).collect();
    if shuffle {
        indices.shuffle(rng);
    }

    let n_train = ((train_split * len as f64).floor() as usize).min(len);
    let train = indices.split_off(len - n_train);

    Ok(IndexSplit {
        train,
        valid: indices,
    })
}

/// Splits `dataset` and wraps each part in a random-order batch loader.
///
/// Returns `(train_loader, valid_loader)`. Each loader owns a sampler seeded
/// from `rng` and reshuffles its draw order at every epoch. An empty pool is
/// not an error here; iterating it is.
pub fn train_valid_loaders<'a, D, R>(
    dataset: &'a D,
    config: &SplitConfig,
    rng: &mut R,
) -> Result<(
    DataLoader<'a, D, SubsetRandomSampler>,
    DataLoader<'a, D, SubsetRandomSampler>,
)>
where
    D: Dataset,
    R: Rng,
{
    config.validate()?;

    let split = split_indices(dataset.len(), config.train_split, config.shuffle, rng)?;
    tracing::debug!(
        "Dataset split: {} training, {} validation",
        split.train.len(),
        split.valid.len()
    );
    if split.train.is_empty() || split.valid.is_empty() {
        tracing::warn!(
            "Degenerate split {}: one of the pools is empty",
            config.train_split
        );
    }

    let train_sampler = SubsetRandomSampler::new(split.train, rng);
    let valid_sampler = SubsetRandomSampler::new(split.valid, rng);

    let train_loader = DataLoader::new(dataset, train_sampler, config.batch_size)?
        .drop_last(config.drop_last)
        .with_name("train");
    let valid_loader = DataLoader::new(dataset, valid_sampler, config.batch_size)?
        .drop_last(config.drop_last)
        .with_name("valid");

    Ok((train_loader, valid_loader))
}
