//! Shared ML types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of model features.
pub const FEATURE_COUNT: usize = 6;

/// Feature names in model column order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "BMI",
    "Duration",
    "Heart_Rate",
    "Body_Temp",
    "Gender_male",
];

/// One feature vector in `FEATURE_NAMES` order.
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Error types for ML operations.
#[derive(Debug, Error)]
pub enum MlError {
    /// A dataset file is absent
    #[error("Dataset not found: {0}")]
    DatasetMissing(String),

    /// CSV reading or decoding failed
    #[error("CSV error in {file}: {message}")]
    Csv {
        /// Which dataset
        file: String,
        /// Parser message
        message: String,
    },

    /// A row parsed but holds unusable values
    #[error("Invalid row in {file}: {message}")]
    InvalidRow {
        /// Which dataset
        file: String,
        /// What is wrong
        message: String,
    },

    /// The join produced no training rows
    #[error("Training set is empty: {0}")]
    EmptyDataset(String),
}

/// Inputs for a single calorie prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Age in years
    pub age: f64,
    /// Body-mass index
    pub bmi: f64,
    /// Workout duration in minutes
    pub duration_minutes: f64,
    /// Average heart rate in bpm
    pub heart_rate_bpm: f64,
    /// Body temperature in °C
    pub body_temp_c: f64,
    /// Gender feature; the tracker always predicts for male
    pub is_male: bool,
}

impl PredictionInput {
    /// Feature vector in model column order.
    pub fn features(&self) -> FeatureRow {
        [
            self.age,
            self.bmi,
            self.duration_minutes,
            self.heart_rate_bpm,
            self.body_temp_c,
            if self.is_male { 1.0 } else { 0.0 },
        ]
    }
}
