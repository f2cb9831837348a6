// --- File: src/data/spiral.rs ---

//! Two interleaved spirals lifted into a 7-dimensional feature space.
//!
//! Each arm is traced by a growing radius `r = 5 * i / H` and angle
//! `t = 1.75 * 2π * i / H + δ`, with `δ = 0` for the positive arm and
//! `δ = π` for the negative one. Every coordinate is perturbed by
//! `U(-1, 1) * noise` and the point `(x, y)` becomes
//! `(x, y, x², y², xy, sin x, sin y)`.
//!
//! Positive points occupy the first half of the dataset and negative
//! points the second half. Nothing is shuffled here; use a sampler for that.

use super::dataset::Dataset;
use crate::config::SpiralConfig;
use crate::error::{DataError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;
use std::f64::consts::PI;

/// Number of features per point.
pub const FEATURE_DIM: usize = 7;

/// Maximum radius reached by each arm.
const MAX_RADIUS: f64 = 5.0;
/// Number of turns each arm makes.
const TURNS: f64 = 1.75;

/// Class of a point: which spiral arm it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Numeric label, `+1` or `-1`.
    pub fn value(self) -> i32 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }

    /// Phase offset of the arm carrying this label.
    fn phase(self) -> f64 {
        match self {
            Label::Positive => 0.0,
            Label::Negative => PI,
        }
    }
}

/// Lifts a 2-D coordinate into the feature space.
pub fn lift(x: f64, y: f64) -> [f64; FEATURE_DIM] {
    [x, y, x * x, y * y, x * y, x.sin(), y.sin()]
}

/// In-memory double spiral dataset. Immutable once generated.
#[derive(Debug, Clone)]
pub struct SpiralDataset {
    /// Feature matrix of shape [len, FEATURE_DIM].
    features: Array2<f32>,
    labels: Vec<Label>,
}

impl SpiralDataset {
    /// Generates `n_points` points, drawing the noise from `rng`.
    ///
    /// An odd `n_points` is truncated to the even count below it, so the two
    /// arms always hold the same number of points.
    pub fn generate<R: Rng>(n_points: usize, noise: f64, rng: &mut R) -> Result<Self> {
        if !noise.is_finite() || noise < 0.0 {
            return Err(DataError::InvalidNoise(noise));
        }

        let arm_len = n_points / 2;
        if n_points % 2 != 0 {
            tracing::warn!(
                "Odd point count {} truncated to {}",
                n_points,
                2 * arm_len
            );
        }

        let total = 2 * arm_len;
        let mut features = Array2::<f32>::zeros((total, FEATURE_DIM));
        let mut labels = Vec::with_capacity(total);

        for (arm, label) in [Label::Positive, Label::Negative].into_iter().enumerate() {
            for i in 0..arm_len {
                let point = arm_point(i, arm_len, label.phase(), noise, rng);
                let mut row = features.row_mut(arm * arm_len + i);
                for (dst, src) in row.iter_mut().zip(point) {
                    *dst = src as f32;
                }
                labels.push(label);
            }
        }

        tracing::debug!(
            "Generated spiral dataset: {} points, noise {}",
            total,
            noise
        );

        Ok(Self { features, labels })
    }

    /// Generates a dataset from a config, seeding from `config.seed` if set.
    pub fn from_config(config: &SpiralConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = config.rng();
        Self::generate(config.n_points, config.noise, &mut rng)
    }

    /// Number of points in each arm.
    pub fn arm_len(&self) -> usize {
        self.labels.len() / 2
    }

    /// View of the full feature matrix, shape [len, FEATURE_DIM].
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Features of a single point.
    pub fn point(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        (index < self.labels.len()).then(|| self.features.index_axis(Axis(0), index))
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Exports the dataset as a feature matrix and a `+1/-1` label vector,
    /// in generation order.
    pub fn to_arrays(&self) -> (Array2<f32>, Array1<i32>) {
        let labels = self.labels.iter().map(|l| l.value()).collect();
        (self.features.clone(), labels)
    }

    /// Number of (positive, negative) points.
    pub fn label_counts(&self) -> (usize, usize) {
        let positive = self
            .labels
            .iter()
            .filter(|&&l| l == Label::Positive)
            .count();
        (positive, self.labels.len() - positive)
    }
}

/// The `i`-th of `arm_len` points on the arm with phase offset `phase`.
fn arm_point<R: Rng>(
    i: usize,
    arm_len: usize,
    phase: f64,
    noise: f64,
    rng: &mut R,
) -> [f64; FEATURE_DIM] {
    let progress = i as f64 / arm_len as f64;
    let r = progress * MAX_RADIUS;
    let t = TURNS * progress * 2.0 * PI + phase;
    let x = r * t.sin() + rng.random_range(-1.0..=1.0) * noise;
    let y = r * t.cos() + rng.random_range(-1.0..=1.0) * noise;
    lift(x, y)
}

impl Dataset for SpiralDataset {
    type Item = Array1<f32>;
    type Label = Label;

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn get(&self, index: usize) -> Option<(Self::Item, Self::Label)> {
        let label = *self.labels.get(index)?;
        let point = self.features.index_axis(Axis(0), index).to_owned();
        Some((point, label))
    }
}
