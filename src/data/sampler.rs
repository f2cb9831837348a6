// --- File: src/data/sampler.rs ---

//! Sampling strategies for the DataLoader.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Trait for samplers: generators of dataset indices.
pub trait Sampler: Iterator<Item = usize> {
    /// Number of indices produced per pass.
    fn len(&self) -> usize;

    /// Whether the sampler produces nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewinds the sampler to the start of a new pass.
    fn reset(&mut self);
}

/// Draws every index of a fixed subset exactly once per pass, in random order.
///
/// The draw order is reshuffled on every [`Sampler::reset`]; the set of
/// indices itself never changes.
pub struct SubsetRandomSampler {
    indices: Vec<usize>,
    current: usize,
    rng: StdRng,
}

impl SubsetRandomSampler {
    /// Creates a sampler over `indices`, seeding its own generator from `rng`.
    pub fn new<R: Rng>(indices: Vec<usize>, rng: &mut R) -> Self {
        Self::from_rng_state(indices, StdRng::from_rng(rng))
    }

    /// Creates a sampler with a fixed seed for reproducibility.
    pub fn with_seed(indices: Vec<usize>, seed: u64) -> Self {
        Self::from_rng_state(indices, StdRng::seed_from_u64(seed))
    }

    fn from_rng_state(indices: Vec<usize>, rng: StdRng) -> Self {
        let mut sampler = Self {
            indices,
            current: 0,
            rng,
        };
        sampler.shuffle();
        sampler
    }

    /// The subset in the current pass's draw order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    fn shuffle(&mut self) {
        self.indices.shuffle(&mut self.rng);
    }
}

impl Iterator for SubsetRandomSampler {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = *self.indices.get(self.current)?;
        self.current += 1;
        Some(idx)
    }
}

impl Sampler for SubsetRandomSampler {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn reset(&mut self) {
        self.current = 0;
        self.shuffle();
    }
}

/// Groups the indices of an inner sampler into batches.
pub struct BatchSampler<S: Sampler> {
    sampler: S,
    batch_size: usize,
    drop_last: bool,
}

impl<S: Sampler> BatchSampler<S> {
    /// Creates a batch sampler.
    ///
    /// # Arguments
    ///
    /// * `sampler` - Inner sampler generating indices
    /// * `batch_size` - Batch size, must be positive
    /// * `drop_last` - Drop the last incomplete batch
    pub fn new(sampler: S, batch_size: usize, drop_last: bool) -> Self {
        Self {
            sampler,
            batch_size,
            drop_last,
        }
    }

    /// Sets whether the last incomplete batch is dropped.
    pub fn drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    /// Number of batches per pass.
    pub fn num_batches(&self) -> usize {
        let n = self.sampler.len();
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Resets the inner sampler.
    pub fn reset(&mut self) {
        self.sampler.reset();
    }
}

impl<S: Sampler> Iterator for BatchSampler<S> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<usize> = self.sampler.by_ref().take(self.batch_size).collect();

        if batch.is_empty() {
            return None;
        }

        if batch.len() < self.batch_size && self.drop_last {
            return None;
        }

        Some(batch)
    }
}
