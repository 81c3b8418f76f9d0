//! Tests for smoothing configuration and series generation.

use sketchbook::SmoothingConfig;
use sketchbook::smoothing::SmoothingError;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_fields_take_defaults() {
    let file = write_config("window = 9\nseed = 11\n");
    let config = SmoothingConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.window(), 9);
    assert_eq!(*config.seed(), Some(11));
    assert_eq!(*config.samples(), 100);
    assert_eq!(*config.confidence(), 0.95);
    assert_eq!(*config.noise_std(), 0.1);
}

#[test]
fn test_unreadable_and_malformed_files_rejected() {
    let missing = SmoothingConfig::from_file("/nonexistent/sketchbook.toml").unwrap_err();
    assert!(missing.message.contains("Failed to read config file"));

    let file = write_config("window = \"wide\"\n");
    let malformed = SmoothingConfig::from_file(file.path()).unwrap_err();
    assert!(malformed.message.contains("Failed to parse config"));
}

#[test]
fn test_default_generation_shape() {
    let series = SmoothingConfig::default()
        .with_seed(Some(5))
        .generate()
        .unwrap();

    assert_eq!(series.x().len(), 100);
    assert_eq!(series.smoothed().len(), 96);
    assert_eq!(series.lower().len(), 96);
    // First window covers x[0..5]; its centre is x[2].
    assert!((series.smoothed_x()[0] - series.x()[2]).abs() < 1e-12);
    // t(0.975, 99) * s / sqrt(100) for s near the spread of sin on [0, 10].
    let half_width = *series.interval().half_width();
    assert!(half_width > 0.05 && half_width < 0.25, "{}", half_width);
}

#[test]
fn test_same_seed_same_series() {
    let config = SmoothingConfig::default().with_seed(Some(42)).with_samples(30);
    assert_eq!(config.generate().unwrap(), config.generate().unwrap());
}

#[test]
fn test_window_larger_than_samples_rejected() {
    let config = SmoothingConfig::default()
        .with_seed(Some(1))
        .with_samples(4)
        .with_window(5);
    assert_eq!(
        config.generate(),
        Err(SmoothingError::InvalidWindow { window: 5, len: 4 })
    );
}

#[test]
fn test_series_serializes_for_json_output() {
    let series = SmoothingConfig::default()
        .with_seed(Some(9))
        .with_samples(10)
        .with_window(3)
        .generate()
        .unwrap();
    let json = serde_json::to_value(&series).unwrap();

    assert_eq!(json["window"], 3);
    assert_eq!(json["smoothed"].as_array().unwrap().len(), 8);
    assert!(json["interval"]["half_width"].is_number());
}
