// --- File: src/data/dataset.rs ---

//! The `Dataset` trait: an indexable collection of labeled samples.

use crate::error::{DataError, Result};

/// Trait for data sources.
///
/// A dataset only has to report its length and hand out a sample by
/// position. Anything satisfying this can be split and batched.
pub trait Dataset: Send + Sync {
    /// Sample type (features).
    type Item;
    /// Label type.
    type Label;

    /// Number of samples in the dataset.
    fn len(&self) -> usize;

    /// Whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sample and its label at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<(Self::Item, Self::Label)>;

    /// Like [`Dataset::get`], but reports an out-of-range index as an error.
    fn try_get(&self, index: usize) -> Result<(Self::Item, Self::Label)> {
        self.get(index).ok_or(DataError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Returns only the sample at `index`.
    fn get_item(&self, index: usize) -> Option<Self::Item> {
        self.get(index).map(|(item, _)| item)
    }

    /// Returns only the label at `index`.
    fn get_label(&self, index: usize) -> Option<Self::Label> {
        self.get(index).map(|(_, label)| label)
    }
}
