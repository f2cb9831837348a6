//! Spiral Split Example - generate the double spiral and walk its loaders.
//!
//! This example demonstrates:
//! - Building a dataset from CLI flags or a JSON config file
//! - Splitting it into train/validation loaders
//! - Iterating a few epochs the way a training loop would
//!
//! Run with: `cargo run --example spiral_split -- --n-points 500 --seed 42`

use clap::Parser;
use spiral_data::config::DataConfig;
use spiral_data::data::{train_valid_loaders, Batch, Dataset, Label, SpiralDataset};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Double spiral dataset with train/validation loaders", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of points to generate
    #[arg(long)]
    n_points: Option<usize>,

    /// Noise magnitude
    #[arg(long)]
    noise: Option<f64>,

    /// Batch size
    #[arg(long)]
    batch_size: Option<usize>,

    /// Fraction of the data used for training
    #[arg(long)]
    train_split: Option<f64>,

    /// Number of epochs to walk
    #[arg(long, default_value_t = 3)]
    epochs: usize,

    /// Seed for both generation and splitting
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spiral_data=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    println!("=== Double Spiral Split ===\n");

    let dataset = SpiralDataset::from_config(&config.dataset)?;
    let (positive, negative) = dataset.label_counts();
    println!("Dataset:");
    println!("  - Points: {} ({} positive, {} negative)", dataset.len(), positive, negative);
    println!("  - Noise: {}", config.dataset.noise);

    let (features, _) = dataset.to_arrays();
    let max_abs = features.column(0).iter().fold(0.0f32, |m, v| m.max(v.abs()));
    println!("  - max |x|: {:.3}\n", max_abs);

    let mut rng = config.loaders.rng();
    let (mut train, mut valid) = train_valid_loaders(&dataset, &config.loaders, &mut rng)?;
    println!(
        "Split: {} train samples in {} batches, {} valid samples in {} batches\n",
        train.len(),
        train.num_batches(),
        valid.len(),
        valid.num_batches()
    );

    for epoch in 1..=args.epochs {
        let (train_batches, train_pos) = walk(train.iter()?)?;
        let (valid_batches, valid_pos) = walk(valid.iter()?)?;
        println!(
            "Epoch {:>3}: train {} batches ({:.1}% positive), valid {} batches ({:.1}% positive)",
            epoch,
            train_batches,
            100.0 * train_pos,
            valid_batches,
            100.0 * valid_pos
        );
    }

    Ok(())
}

/// Applies CLI overrides on top of the config file (or defaults).
fn build_config(args: &Args) -> spiral_data::Result<DataConfig> {
    let mut config = match &args.config {
        Some(path) => DataConfig::from_json_file(path)?,
        None => DataConfig::default(),
    };

    if let Some(n) = args.n_points {
        config.dataset.n_points = n;
    }
    if let Some(noise) = args.noise {
        config.dataset.noise = noise;
    }
    if let Some(bs) = args.batch_size {
        config.loaders.batch_size = bs;
    }
    if let Some(split) = args.train_split {
        config.loaders.train_split = split;
    }
    if let Some(seed) = args.seed {
        config.dataset.seed = Some(seed);
        config.loaders.seed = Some(seed.wrapping_add(1));
    }

    config.validate()?;
    Ok(config)
}

/// Consumes one epoch, returning the batch count and the positive fraction.
fn walk<I>(batches: I) -> spiral_data::Result<(usize, f64)>
where
    I: Iterator<Item = spiral_data::Result<Batch<ndarray::Array1<f32>, Label>>>,
{
    let mut count = 0;
    let mut seen = 0;
    let mut positive = 0;
    for batch in batches {
        let batch = batch?;
        let x = batch.features()?;
        debug_assert_eq!(x.nrows(), batch.len());
        count += 1;
        seen += batch.len();
        positive += batch.labels.iter().filter(|&&l| l == Label::Positive).count();
    }
    Ok((count, positive as f64 / seen.max(1) as f64))
}
