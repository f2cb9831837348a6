//! End-to-end checks: generate a spiral, split it, iterate the loaders.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spiral_data::config::{DataConfig, SplitConfig, SpiralConfig};
use spiral_data::data::{
    split_indices, train_valid_loaders, Dataset, Label, SpiralDataset, FEATURE_DIM,
};
use spiral_data::DataError;
use std::collections::HashSet;

#[test]
fn ten_points_without_noise() {
    let mut rng = StdRng::seed_from_u64(1);
    let ds = SpiralDataset::generate(10, 0.0, &mut rng).unwrap();

    assert_eq!(ds.len(), 10);
    let labels: Vec<i32> = (0..10).map(|i| ds.get_label(i).unwrap().value()).collect();
    assert_eq!(labels, vec![1, 1, 1, 1, 1, -1, -1, -1, -1, -1]);
}

#[test]
fn first_point_of_each_arm_is_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let ds = SpiralDataset::generate(8, 0.0, &mut rng).unwrap();
    for idx in [0, 4] {
        let point = ds.point(idx).unwrap();
        assert_abs_diff_eq!(point[0], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(point[1], 0.0, epsilon = 1e-6);
    }
}

#[test]
fn second_point_matches_closed_form() {
    // i = 1 of H = 4: r = 1.25, t = 1.75 * 0.25 * 2π
    let mut rng = StdRng::seed_from_u64(1);
    let ds = SpiralDataset::generate(8, 0.0, &mut rng).unwrap();
    let r = 1.25f64;
    let t = 1.75 * 0.25 * 2.0 * std::f64::consts::PI;

    let (point, label) = ds.get(1).unwrap();
    assert_eq!(label, Label::Positive);
    assert_abs_diff_eq!(point[0] as f64, r * t.sin(), epsilon = 1e-6);
    assert_abs_diff_eq!(point[1] as f64, r * t.cos(), epsilon = 1e-6);

    let (point, label) = ds.get(5).unwrap();
    assert_eq!(label, Label::Negative);
    let t = t + std::f64::consts::PI;
    assert_abs_diff_eq!(point[0] as f64, r * t.sin(), epsilon = 1e-6);
    assert_abs_diff_eq!(point[1] as f64, r * t.cos(), epsilon = 1e-6);
}

#[test]
fn bulk_export_matches_lookup() {
    let mut rng = StdRng::seed_from_u64(2);
    let ds = SpiralDataset::generate(10, 0.2, &mut rng).unwrap();
    let (features, labels) = ds.to_arrays();

    assert_eq!(features.dim(), (10, FEATURE_DIM));
    assert_eq!(labels.len(), 10);
    for i in 0..10 {
        let (point, label) = ds.get(i).unwrap();
        assert_eq!(features.row(i), point);
        assert_eq!(labels[i], label.value());
    }
}

#[test]
fn unshuffled_split_of_one_hundred() {
    let mut rng = StdRng::seed_from_u64(0);
    let split = split_indices(100, 0.8, false, &mut rng).unwrap();

    assert_eq!(split.valid, (0..20).collect::<Vec<_>>());
    assert_eq!(split.train, (20..100).collect::<Vec<_>>());
    let valid: HashSet<_> = split.valid.into_iter().collect();
    assert!(split.train.iter().all(|i| !valid.contains(i)));
}

#[test]
fn loaders_cover_dataset_every_epoch() {
    let config = DataConfig {
        dataset: SpiralConfig::default().n_points(200).seed(5),
        loaders: SplitConfig::default().batch_size(32).seed(6),
    };
    let ds = SpiralDataset::from_config(&config.dataset).unwrap();
    let mut rng = config.loaders.rng();
    let (mut train, mut valid) = train_valid_loaders(&ds, &config.loaders, &mut rng).unwrap();

    assert_eq!(train.len(), 160);
    assert_eq!(valid.len(), 40);
    assert_eq!(train.num_batches(), 5);
    assert_eq!(valid.num_batches(), 2);

    let mut first_order = Vec::new();
    for epoch in 0..3 {
        let mut seen: Vec<usize> = Vec::new();
        for batch in train.iter().unwrap() {
            let batch = batch.unwrap();
            assert!(batch.len() <= 32);
            assert_eq!(batch.features().unwrap().ncols(), FEATURE_DIM);
            seen.extend(&batch.indices);
        }
        for batch in valid.iter().unwrap() {
            seen.extend(&batch.unwrap().indices);
        }
        if epoch == 0 {
            first_order = seen.clone();
        } else {
            assert_ne!(seen, first_order, "draw order should change between epochs");
        }
        seen.sort();
        assert_eq!(seen, (0..200).collect::<Vec<_>>());
    }
}

#[test]
fn seeded_pipeline_is_reproducible() {
    let run = || {
        let ds = SpiralDataset::from_config(&SpiralConfig::default().n_points(60).seed(9)).unwrap();
        let config = SplitConfig::default().batch_size(7).seed(10);
        let mut rng = config.rng();
        let (mut train, _) = train_valid_loaders(&ds, &config, &mut rng).unwrap();
        train
            .iter()
            .unwrap()
            .flat_map(|b| b.unwrap().indices)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn config_file_round_trip_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let config = DataConfig {
        dataset: SpiralConfig::default().n_points(21).noise(0.0).seed(3),
        loaders: SplitConfig::default().batch_size(4).train_split(0.5),
    };
    config.to_json_file(&path).unwrap();
    let loaded = DataConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);

    // 21 is odd and truncates to 20
    let ds = SpiralDataset::from_config(&loaded.dataset).unwrap();
    assert_eq!(ds.len(), 20);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DataConfig::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(DataError::Io(_))));
}
