//! Integration tests training the calorie model on the bundled dataset.

use std::path::PathBuf;

use fittrack::ml::{CaloriePredictor, PredictionInput, TrainingSet};
use fittrack::storage::ModelSettings;

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn settings() -> ModelSettings {
    ModelSettings {
        exercise_csv: bundled("exercise.csv"),
        calories_csv: bundled("calories.csv"),
        n_estimators: 10,
        ..Default::default()
    }
}

fn workout(duration: f64, heart_rate: f64) -> PredictionInput {
    PredictionInput {
        age: 29.0,
        bmi: 22.04,
        duration_minutes: duration,
        heart_rate_bpm: heart_rate,
        body_temp_c: 37.0 + duration * 0.1,
        is_male: true,
    }
}

#[test]
fn test_bundled_dataset_joins_every_row() {
    let settings = settings();
    let set = TrainingSet::load(&settings.exercise_csv, &settings.calories_csv).unwrap();

    assert_eq!(set.len(), 400);
    assert!(set.targets.iter().all(|&c| c >= 0.0));
}

#[test]
fn test_predictions_are_plausible() {
    let predictor = CaloriePredictor::from_settings(&settings());

    let short = predictor.predict(&workout(5.0, 85.0)).unwrap();
    let long = predictor.predict(&workout(28.0, 115.0)).unwrap();

    assert!(short >= 0.0);
    assert!(long > short);
    assert!(predictor.is_trained());
}

#[test]
fn test_training_is_deterministic() {
    let a = CaloriePredictor::from_settings(&settings());
    let b = CaloriePredictor::from_settings(&settings());

    let input = workout(20.0, 105.0);
    assert_eq!(a.predict(&input).unwrap(), b.predict(&input).unwrap());
}
