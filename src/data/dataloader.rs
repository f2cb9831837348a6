// --- File: src/data/dataloader.rs ---

//! DataLoader: an epoch-by-epoch iterator over batches of a dataset.

use super::dataset::Dataset;
use super::sampler::{BatchSampler, Sampler};
use super::spiral::Label;
use crate::error::{DataError, Result};
use ndarray::{Array1, Array2, Axis};

/// A batch of samples drawn from a dataset.
#[derive(Debug, Clone)]
pub struct Batch<I, L> {
    /// Dataset positions of the samples in this batch
    pub indices: Vec<usize>,
    /// Samples, in draw order
    pub items: Vec<I>,
    /// Labels, aligned with `items`
    pub labels: Vec<L>,
}

impl<I, L> Batch<I, L> {
    /// Batch size.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Batch<Array1<f32>, Label> {
    /// Stacks the samples into a [batch, features] matrix.
    pub fn features(&self) -> Result<Array2<f32>> {
        let views: Vec<_> = self.items.iter().map(|item| item.view()).collect();
        Ok(ndarray::stack(Axis(0), &views)?)
    }

    /// Labels as `+1/-1`.
    pub fn label_values(&self) -> Array1<i32> {
        self.labels.iter().map(|l| l.value()).collect()
    }
}

/// DataLoader: iterates over a dataset in batches drawn by a sampler.
///
/// Each call to [`DataLoader::iter`] is one epoch. The sampler is reset
/// at the start of every epoch, so a random sampler yields a fresh draw
/// order each time over the same set of indices.
///
/// # Example
///
/// ```rust,ignore
/// let sampler = SubsetRandomSampler::with_seed(indices, 42);
/// let mut loader = DataLoader::new(&dataset, sampler, 32)?.drop_last(false);
///
/// for epoch in 0..10 {
///     for batch in loader.iter()? {
///         let batch = batch?;
///         println!("Batch size: {}", batch.len());
///     }
/// }
/// ```
pub struct DataLoader<'a, D: Dataset, S: Sampler> {
    dataset: &'a D,
    batch_sampler: BatchSampler<S>,
    name: String,
    epoch: usize,
}

impl<'a, D: Dataset, S: Sampler> DataLoader<'a, D, S> {
    /// Creates a new DataLoader.
    ///
    /// # Arguments
    ///
    /// * `dataset` - Dataset to read from
    /// * `sampler` - Source of dataset positions
    /// * `batch_size` - Batch size, must be positive
    pub fn new(dataset: &'a D, sampler: S, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(DataError::InvalidBatchSize);
        }
        Ok(Self {
            dataset,
            batch_sampler: BatchSampler::new(sampler, batch_size, false),
            name: "data".to_string(),
            epoch: 0,
        })
    }

    /// Sets whether the last incomplete batch is dropped.
    pub fn drop_last(mut self, drop_last: bool) -> Self {
        self.batch_sampler = self.batch_sampler.drop_last(drop_last);
        self
    }

    /// Names the loader; used in log lines and errors.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of batches per epoch.
    pub fn num_batches(&self) -> usize {
        self.batch_sampler.num_batches()
    }

    /// Number of samples per epoch.
    pub fn len(&self) -> usize {
        self.batch_sampler.sampler().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn batch_size(&self) -> usize {
        self.batch_sampler.batch_size()
    }

    /// Number of epochs started so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn sampler(&self) -> &S {
        self.batch_sampler.sampler()
    }

    /// Starts a new epoch and returns an iterator over its batches.
    ///
    /// Fails with [`DataError::EmptyDataset`] if the loader has nothing to draw.
    pub fn iter(&mut self) -> Result<DataLoaderIterator<'_, 'a, D, S>> {
        if self.is_empty() {
            return Err(DataError::EmptyDataset(self.name.clone()));
        }

        self.batch_sampler.reset();
        self.epoch += 1;
        tracing::trace!(
            "Loader '{}' starting epoch {} ({} batches)",
            self.name,
            self.epoch,
            self.num_batches()
        );

        Ok(DataLoaderIterator {
            dataset: self.dataset,
            batch_sampler: &mut self.batch_sampler,
        })
    }
}

/// Iterator over the batches of one epoch.
pub struct DataLoaderIterator<'l, 'a, D: Dataset, S: Sampler> {
    dataset: &'a D,
    batch_sampler: &'l mut BatchSampler<S>,
}

impl<'l, 'a, D: Dataset, S: Sampler> Iterator for DataLoaderIterator<'l, 'a, D, S> {
    type Item = Result<Batch<D::Item, D::Label>>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.batch_sampler.next()?;

        let mut items = Vec::with_capacity(indices.len());
        let mut labels = Vec::with_capacity(indices.len());
        for &idx in &indices {
            match self.dataset.try_get(idx) {
                Ok((item, label)) => {
                    items.push(item);
                    labels.push(label);
                }
                Err(e) => return Some(Err(e)),
            }
        }

        Some(Ok(Batch {
            indices,
            items,
            labels,
        }))
    }
}
