//! Training data loading and feature engineering.
//!
//! The exercise and calories datasets are inner-joined on `User_ID`. BMI is
//! derived from weight and height, and gender is one-hot encoded with the
//! first category dropped, leaving a single `Gender_male` column.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::types::{FeatureRow, MlError};
use crate::metrics::body;

/// One row of the exercise dataset.
#[derive(Debug, Deserialize)]
struct ExerciseRow {
    #[serde(rename = "User_ID")]
    user_id: u64,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "Height")]
    height: f64,
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(rename = "Duration")]
    duration: f64,
    #[serde(rename = "Heart_Rate")]
    heart_rate: f64,
    #[serde(rename = "Body_Temp")]
    body_temp: f64,
}

/// One row of the calories dataset.
#[derive(Debug, Deserialize)]
struct CaloriesRow {
    #[serde(rename = "User_ID")]
    user_id: u64,
    #[serde(rename = "Calories")]
    calories: f64,
}

/// Joined, feature-engineered training data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    /// Feature vectors
    pub features: Vec<FeatureRow>,
    /// Calories burned, aligned with `features`
    pub targets: Vec<f64>,
}

impl TrainingSet {
    /// Load and join the two dataset files.
    pub fn load(exercise_csv: &Path, calories_csv: &Path) -> Result<Self, MlError> {
        let exercise = open_dataset(exercise_csv)?;
        let calories = open_dataset(calories_csv)?;
        Self::join(
            exercise,
            &exercise_csv.display().to_string(),
            calories,
            &calories_csv.display().to_string(),
        )
    }

    /// Join datasets from any readers producing CSV text with headers.
    pub fn from_readers<E: Read, C: Read>(exercise: E, calories: C) -> Result<Self, MlError> {
        Self::join(exercise, "exercise", calories, "calories")
    }

    /// Inner join; the names label errors.
    fn join<E: Read, C: Read>(
        exercise: E,
        exercise_name: &str,
        calories: C,
        calories_name: &str,
    ) -> Result<Self, MlError> {
        let mut calories_by_user: HashMap<u64, Vec<f64>> = HashMap::new();
        let mut reader = csv::Reader::from_reader(calories);
        for row in reader.deserialize::<CaloriesRow>() {
            let row = row.map_err(|e| MlError::Csv {
                file: calories_name.to_string(),
                message: e.to_string(),
            })?;
            calories_by_user.entry(row.user_id).or_default().push(row.calories);
        }

        let mut set = TrainingSet::default();
        let mut reader = csv::Reader::from_reader(exercise);
        for row in reader.deserialize::<ExerciseRow>() {
            let row = row.map_err(|e| MlError::Csv {
                file: exercise_name.to_string(),
                message: e.to_string(),
            })?;

            let Some(targets) = calories_by_user.get(&row.user_id) else {
                continue;
            };

            if row.height <= 0.0 {
                return Err(MlError::InvalidRow {
                    file: exercise_name.to_string(),
                    message: format!("User_ID {} has non-positive height", row.user_id),
                });
            }

            let features = [
                row.age,
                body::bmi(row.weight, row.height),
                row.duration,
                row.heart_rate,
                row.body_temp,
                encode_gender(&row.gender),
            ];

            // Inner join: one output row per matching calories row
            for &calories in targets {
                set.features.push(features);
                set.targets.push(calories);
            }
        }

        Ok(set)
    }

    /// Number of training rows.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the join produced no rows.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// `Gender_male` column: 1 for "male", 0 for anything else.
fn encode_gender(gender: &str) -> f64 {
    if gender.trim().eq_ignore_ascii_case("male") {
        1.0
    } else {
        0.0
    }
}

fn open_dataset(path: &Path) -> Result<File, MlError> {
    File::open(path).map_err(|e| MlError::DatasetMissing(format!("{}: {}", path.display(), e)))
}
