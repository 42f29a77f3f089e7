use std::{path::PathBuf, time::Duration};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub reference_data: ReferenceDataConfig,
    pub detector: DetectorConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct ReferenceDataConfig {
    pub ingredients_path: PathBuf,
    pub nutrition_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct DetectorConfig {
    pub endpoint: String,
    pub confidence_threshold: f64,
    pub timeout: Duration,
    /// Dish names indexed by the detector's class id.
    pub dish_classes: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

/// Parses a numeric field, falling back to `0.0` for blank, malformed or
/// non-finite input.
pub fn parse_lenient_f64(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
